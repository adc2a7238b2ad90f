//! Work entry operations

use shared::error::{AppError, ErrorCode};
use shared::models::{WorkEntry, WorkEntryInput, WorkEntryView};
use sqlx::SqlitePool;

use super::{Lookup, ServiceResult, find_employee, find_office, find_work_entry, find_workplace};
use crate::auth::scope::{Operation, Owner, ensure};
use crate::auth::Identity;
use crate::db::repository::{self, work_entry::NewWorkEntry};
use crate::entries;

/// Record one entry for an employee
///
/// Order: resolve employee, scope check, workplace match, codec, insert.
pub async fn create_work_entry(
    pool: &SqlitePool,
    identity: &Identity,
    input: WorkEntryInput,
) -> ServiceResult<WorkEntry> {
    let mut tx = pool.begin().await?;
    let (employee, workplace, owner) =
        find_employee(&mut tx, input.employee_id, Lookup::Live).await?;
    ensure(identity, Operation::EmployeeEntries, &owner)?;

    if input.workplace_id != employee.workplace_id {
        return Err(AppError::new(ErrorCode::EntryWorkplaceMismatch)
            .with_detail("workplace_id", input.workplace_id)
            .with_detail("employee_workplace_id", employee.workplace_id)
            .into());
    }

    let encoded = entries::encode(&input, workplace.work_type)?;
    let entry = repository::work_entry::create(
        &mut tx,
        &NewWorkEntry {
            employee_id: employee.id,
            workplace_id: workplace.id,
            date: encoded.date,
            payload: encoded.payload,
            comment: encoded.comment,
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        entry_id = entry.id,
        employee_id = entry.employee_id,
        work_type = workplace.work_type.as_str(),
        "Work entry created"
    );
    Ok(entry)
}

/// Scope follows the employee's current workplace
pub async fn delete_work_entry(pool: &SqlitePool, identity: &Identity, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    let entry = find_work_entry(&mut tx, id, Lookup::IncludeDeleted).await?;
    let (_, _, owner) = find_employee(&mut tx, entry.employee_id, Lookup::Live).await?;
    ensure(identity, Operation::EmployeeEntries, &owner)?;

    repository::work_entry::soft_delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(entry_id = id, by = identity.user_id, "Work entry deleted");
    Ok(())
}

pub async fn list_work_entries_by_office(
    pool: &SqlitePool,
    identity: &Identity,
    office_id: i64,
) -> ServiceResult<Vec<WorkEntryView>> {
    let mut conn = pool.acquire().await?;
    find_office(&mut conn, office_id, Lookup::Live).await?;
    ensure(identity, Operation::ListEntriesByOffice, &Owner::office(office_id))?;
    Ok(repository::work_entry::list_by_office(&mut conn, office_id).await?)
}

pub async fn list_work_entries_by_workplace(
    pool: &SqlitePool,
    identity: &Identity,
    workplace_id: i64,
) -> ServiceResult<Vec<WorkEntryView>> {
    let mut conn = pool.acquire().await?;
    let (_, owner) = find_workplace(&mut conn, workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ListEntriesByWorkplace, &owner)?;
    Ok(repository::work_entry::list_by_workplace(&mut conn, workplace_id).await?)
}

pub async fn list_work_entries_by_employee(
    pool: &SqlitePool,
    identity: &Identity,
    employee_id: i64,
) -> ServiceResult<Vec<WorkEntryView>> {
    let mut conn = pool.acquire().await?;
    let (_, _, owner) = find_employee(&mut conn, employee_id, Lookup::Live).await?;
    ensure(identity, Operation::EmployeeEntries, &owner)?;
    Ok(repository::work_entry::list_by_employee(&mut conn, employee_id).await?)
}

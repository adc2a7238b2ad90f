//! Employee operations

use shared::models::{Employee, EmployeeCreate};
use sqlx::SqlitePool;

use super::{Lookup, ServiceResult, find_employee, find_office, find_workplace};
use crate::auth::scope::{Operation, Owner, ensure};
use crate::auth::Identity;
use crate::db::repository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub async fn create_employee(
    pool: &SqlitePool,
    identity: &Identity,
    data: EmployeeCreate,
) -> ServiceResult<Employee> {
    let mut tx = pool.begin().await?;
    let (_, owner) = find_workplace(&mut tx, data.workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ManageEmployee, &owner)?;
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    let employee = repository::employee::create(
        &mut tx,
        &EmployeeCreate {
            name: data.name.trim().to_string(),
            workplace_id: data.workplace_id,
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        employee_id = employee.id,
        workplace_id = employee.workplace_id,
        "Employee created"
    );
    Ok(employee)
}

pub async fn get_employee(
    pool: &SqlitePool,
    identity: &Identity,
    id: i64,
) -> ServiceResult<Employee> {
    let mut conn = pool.acquire().await?;
    let (employee, _, owner) = find_employee(&mut conn, id, Lookup::Live).await?;
    ensure(identity, Operation::ReadEmployee, &owner)?;
    Ok(employee)
}

/// Live employees of one workplace
pub async fn list_employees(
    pool: &SqlitePool,
    identity: &Identity,
    workplace_id: i64,
) -> ServiceResult<Vec<Employee>> {
    let mut conn = pool.acquire().await?;
    let (_, owner) = find_workplace(&mut conn, workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ListEmployees, &owner)?;
    Ok(repository::employee::list_by_workplace(&mut conn, workplace_id).await?)
}

/// Live employees across every workplace of an office
pub async fn list_employees_by_office(
    pool: &SqlitePool,
    identity: &Identity,
    office_id: i64,
) -> ServiceResult<Vec<Employee>> {
    let mut conn = pool.acquire().await?;
    find_office(&mut conn, office_id, Lookup::Live).await?;
    ensure(identity, Operation::ListEmployees, &Owner::office(office_id))?;
    Ok(repository::employee::list_by_office(&mut conn, office_id).await?)
}

/// Move an employee to another workplace of the same office
///
/// Both the current and the target workplace go through the guard, so a
/// target in another office is forbidden and nothing changes. Existing
/// entries keep the workplace they were recorded at.
pub async fn transfer_employee(
    pool: &SqlitePool,
    identity: &Identity,
    id: i64,
    new_workplace_id: i64,
) -> ServiceResult<Employee> {
    let mut tx = pool.begin().await?;
    let (employee, _, from) = find_employee(&mut tx, id, Lookup::Live).await?;
    ensure(identity, Operation::ManageEmployee, &from)?;

    let (_, to) = find_workplace(&mut tx, new_workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ManageEmployee, &to)?;

    let moved = repository::employee::update_workplace(&mut tx, id, new_workplace_id).await?;
    tx.commit().await?;

    tracing::info!(
        employee_id = id,
        from_workplace = employee.workplace_id,
        to_workplace = new_workplace_id,
        "Employee transferred"
    );
    Ok(moved)
}

/// Soft delete the employee and all of its live entries in one transaction
pub async fn delete_employee(pool: &SqlitePool, identity: &Identity, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    let (_, _, owner) = find_employee(&mut tx, id, Lookup::IncludeDeleted).await?;
    ensure(identity, Operation::ManageEmployee, &owner)?;

    let entries = repository::employee::soft_delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(employee_id = id, entries, "Employee deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use shared::error::{ErrorCode, ErrorKind};
    use shared::models::WorkType;

    #[tokio::test]
    async fn test_cross_office_transfer_forbidden_and_unchanged() {
        let pool = pool().await;
        let mine = office(&pool, "Mine").await;
        let theirs = office(&pool, "Theirs").await;
        let home = workplace(&pool, mine.id, WorkType::Hours).await;
        let away = workplace(&pool, theirs.id, WorkType::Hours).await;
        let e = employee_in(&pool, home.id, "Alice").await;
        let caller = admin(mine.id);

        let err = transfer_employee(&pool, &caller, e.id, away.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.code(), ErrorCode::OfficeMismatch);

        let after = get_employee(&pool, &caller, e.id).await.unwrap();
        assert_eq!(after.workplace_id, home.id);
        assert_eq!(after.updated_at, e.updated_at);
    }

    #[tokio::test]
    async fn test_transfer_within_office() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w1 = workplace(&pool, o.id, WorkType::Hours).await;
        let w2 = workplace(&pool, o.id, WorkType::Time).await;
        let e = employee_in(&pool, w1.id, "Bob").await;
        let caller = admin(o.id);

        let moved = transfer_employee(&pool, &caller, e.id, w2.id).await.unwrap();
        assert_eq!(moved.workplace_id, w2.id);
        assert!(list_employees(&pool, &caller, w1.id).await.unwrap().is_empty());
        assert_eq!(list_employees_by_office(&pool, &caller, o.id).await.unwrap().len(), 1);

        let err = transfer_employee(&pool, &caller, e.id, 999).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::WorkplaceNotFound);
    }

    #[tokio::test]
    async fn test_manager_cannot_manage_employees() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Hours).await;
        let mgr = manager(o.id, w.id, 1);

        let err = create_employee(
            &pool,
            &mgr,
            EmployeeCreate {
                name: "Carol".into(),
                workplace_id: w.id,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::AdminRequired);

        let e = employee_in(&pool, w.id, "Carol").await;
        assert!(get_employee(&pool, &mgr, e.id).await.is_ok());
        let err = delete_employee(&pool, &mgr, e.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_employee_sees_only_self() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Hours).await;
        let me = employee_in(&pool, w.id, "Me").await;
        let other = employee_in(&pool, w.id, "Other").await;
        let caller = employee(o.id, w.id, me.id);

        assert!(get_employee(&pool, &caller, me.id).await.is_ok());
        let err = get_employee(&pool, &caller, other.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmployeeMismatch);
        let err = list_employees(&pool, &caller, w.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_create_into_deleted_workplace_not_found() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Hours).await;
        let caller = admin(o.id);
        crate::services::workplace::delete_workplace(&pool, &caller, w.id)
            .await
            .unwrap();

        let err = create_employee(
            &pool,
            &caller,
            EmployeeCreate {
                name: "Dan".into(),
                workplace_id: w.id,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_employee_under_deleted_workplace_is_gone() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Hours).await;
        let kept_wp = workplace(&pool, o.id, WorkType::Time).await;
        let e = employee_in(&pool, w.id, "Alice").await;
        let kept = employee_in(&pool, kept_wp.id, "Bob").await;
        let caller = admin(o.id);
        crate::services::workplace::delete_workplace(&pool, &caller, w.id)
            .await
            .unwrap();

        let listed = list_employees_by_office(&pool, &caller, o.id).await.unwrap();
        assert_eq!(listed.iter().map(|e| e.id).collect::<Vec<_>>(), vec![kept.id]);

        let err = get_employee(&pool, &caller, e.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::WorkplaceNotFound);
        let err = delete_employee(&pool, &caller, e.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::WorkplaceNotFound);
        let err = transfer_employee(&pool, &caller, e.id, kept_wp.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

//! 服务层 - 授权后的核心业务操作
//!
//! 每个操作的顺序相同：
//! 1. 解析目标的归属链 (WorkEntry → Employee → Workplace → Office)
//! 2. 调用 [`scope::ensure`](crate::auth::scope::ensure)
//! 3. 校验输入 / 编码工时
//! 4. 读写存储 (多步写入在同一个事务中)
//!
//! 读操作使用一个连接，写操作使用一个事务，同一操作内不会再取第二个连接。

pub mod employee;
pub mod error;
pub mod login;
pub mod office;
pub mod report;
pub mod seed;
pub mod user;
pub mod work_entry;
pub mod workplace;

pub use error::{ServiceError, ServiceResult};

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, Office, WorkEntry, Workplace};
use sqlx::SqliteConnection;

use crate::auth::Owner;
use crate::db::repository;

/// Whether the looked-up row itself may be soft-deleted
///
/// Delete operations resolve their target with `IncludeDeleted`, so deleting
/// twice reaches the store and reports a conflict instead of "not found".
/// Parents in the ownership chain are always resolved live: a deleted parent
/// is a missing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    Live,
    IncludeDeleted,
}

fn missing(code: ErrorCode, what: &str, id: i64) -> ServiceError {
    AppError::with_message(code, format!("{what} {id} not found"))
        .with_detail("id", id)
        .into()
}

pub(crate) async fn find_office(
    conn: &mut SqliteConnection,
    id: i64,
    lookup: Lookup,
) -> ServiceResult<Office> {
    let office = match lookup {
        Lookup::Live => repository::office::find_by_id(conn, id).await?,
        Lookup::IncludeDeleted => repository::office::find_by_id_any(conn, id).await?,
    };
    office.ok_or_else(|| missing(ErrorCode::OfficeNotFound, "Office", id))
}

/// Workplace plus its owner; the office must resolve too
pub(crate) async fn find_workplace(
    conn: &mut SqliteConnection,
    id: i64,
    lookup: Lookup,
) -> ServiceResult<(Workplace, Owner)> {
    let workplace = match lookup {
        Lookup::Live => repository::workplace::find_by_id(conn, id).await?,
        Lookup::IncludeDeleted => repository::workplace::find_by_id_any(conn, id).await?,
    }
    .ok_or_else(|| missing(ErrorCode::WorkplaceNotFound, "Workplace", id))?;

    find_office(conn, workplace.office_id, Lookup::Live).await?;
    let owner = Owner::workplace(workplace.office_id, workplace.id);
    Ok((workplace, owner))
}

/// Employee, its current workplace and the resolved owner
pub(crate) async fn find_employee(
    conn: &mut SqliteConnection,
    id: i64,
    lookup: Lookup,
) -> ServiceResult<(Employee, Workplace, Owner)> {
    let employee = match lookup {
        Lookup::Live => repository::employee::find_by_id(conn, id).await?,
        Lookup::IncludeDeleted => repository::employee::find_by_id_any(conn, id).await?,
    }
    .ok_or_else(|| missing(ErrorCode::EmployeeNotFound, "Employee", id))?;

    let (workplace, _) = find_workplace(conn, employee.workplace_id, Lookup::Live).await?;
    let owner = Owner::employee(workplace.office_id, workplace.id, employee.id);
    Ok((employee, workplace, owner))
}

pub(crate) async fn find_work_entry(
    conn: &mut SqliteConnection,
    id: i64,
    lookup: Lookup,
) -> ServiceResult<WorkEntry> {
    match lookup {
        Lookup::Live => repository::work_entry::find_by_id(conn, id).await?,
        Lookup::IncludeDeleted => repository::work_entry::find_by_id_any(conn, id).await?,
    }
    .ok_or_else(|| missing(ErrorCode::WorkEntryNotFound, "Work entry", id))
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use shared::error::ErrorKind;
    use shared::models::WorkType;

    #[tokio::test]
    async fn test_chain_with_deleted_office_is_not_found() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Hours).await;
        let e = employee_in(&pool, w.id, "Alice").await;

        let mut conn = pool.acquire().await.unwrap();
        let (_, _, owner) = find_employee(&mut conn, e.id, Lookup::Live).await.unwrap();
        assert_eq!(owner, Owner::employee(o.id, w.id, e.id));

        repository::office::soft_delete(&mut conn, o.id).await.unwrap();
        for lookup in [Lookup::Live, Lookup::IncludeDeleted] {
            let err = find_employee(&mut conn, e.id, lookup).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert_eq!(err.code(), ErrorCode::OfficeNotFound);
        }
    }
}

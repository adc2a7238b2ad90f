//! Employee Repository

use super::{RepoError, RepoResult, soft_delete_row, work_entry};
use shared::models::{Employee, EmployeeCreate};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, name, workplace_id, created_at, updated_at";

pub async fn create(conn: &mut SqliteConnection, data: &EmployeeCreate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (name, workplace_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.workplace_id)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE id = ? AND deleted_at IS NULL");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(employee)
}

pub async fn find_by_id_any(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employee WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(employee)
}

pub async fn list_by_workplace(
    conn: &mut SqliteConnection,
    workplace_id: i64,
) -> RepoResult<Vec<Employee>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM employee WHERE workplace_id = ? AND deleted_at IS NULL ORDER BY id"
    );
    let employees = sqlx::query_as::<_, Employee>(&sql)
        .bind(workplace_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(employees)
}

pub async fn list_by_office(
    conn: &mut SqliteConnection,
    office_id: i64,
) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT e.id, e.name, e.workplace_id, e.created_at, e.updated_at \
         FROM employee e JOIN workplace w ON w.id = e.workplace_id \
         WHERE w.office_id = ? AND e.deleted_at IS NULL AND w.deleted_at IS NULL \
         ORDER BY e.id",
    )
    .bind(office_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(employees)
}

/// Point a live employee at another workplace
pub async fn update_workplace(
    conn: &mut SqliteConnection,
    id: i64,
    workplace_id: i64,
) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET workplace_id = ?1, updated_at = ?2 WHERE id = ?3 AND deleted_at IS NULL",
    )
    .bind(workplace_id)
    .bind(now)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("employee {id}")));
    }
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("employee {id}")))
}

/// Soft delete the employee and every live entry it owns.
///
/// Two statements; run inside a transaction so both land or neither does.
pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<u64> {
    soft_delete_row(conn, "employee", id).await?;
    work_entry::soft_delete_by_employee(conn, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{office, testing::test_pool, workplace};
    use shared::models::{WorkType, WorkplaceCreate};

    async fn setup(conn: &mut SqliteConnection) -> (i64, i64, i64) {
        let o = office::create(conn, "O1").await.unwrap();
        let w1 = workplace::create(
            conn,
            &WorkplaceCreate {
                name: "A".into(),
                office_id: o.id,
                work_type: WorkType::Hours,
            },
        )
        .await
        .unwrap();
        let w2 = workplace::create(
            conn,
            &WorkplaceCreate {
                name: "B".into(),
                office_id: o.id,
                work_type: WorkType::Hours,
            },
        )
        .await
        .unwrap();
        (o.id, w1.id, w2.id)
    }

    #[tokio::test]
    async fn test_office_list_skips_deleted_workplace() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let (office_id, w1, w2) = setup(&mut conn).await;
        let kept = create(&mut conn, &EmployeeCreate { name: "Kept".into(), workplace_id: w1 })
            .await
            .unwrap();
        create(&mut conn, &EmployeeCreate { name: "Gone".into(), workplace_id: w2 })
            .await
            .unwrap();

        workplace::soft_delete(&mut conn, w2).await.unwrap();

        let listed = list_by_office(&mut conn, office_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_transfer_moves_employee_between_lists() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let (office_id, w1, w2) = setup(&mut conn).await;

        let e = create(
            &mut conn,
            &EmployeeCreate {
                name: "Alice".into(),
                workplace_id: w1,
            },
        )
        .await
        .unwrap();

        let moved = update_workplace(&mut conn, e.id, w2).await.unwrap();
        assert_eq!(moved.workplace_id, w2);
        assert!(list_by_workplace(&mut conn, w1).await.unwrap().is_empty());
        assert_eq!(list_by_workplace(&mut conn, w2).await.unwrap().len(), 1);
        assert_eq!(list_by_office(&mut conn, office_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleted_employee_cannot_be_transferred() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let (_, w1, w2) = setup(&mut conn).await;

        let e = create(
            &mut conn,
            &EmployeeCreate {
                name: "Bob".into(),
                workplace_id: w1,
            },
        )
        .await
        .unwrap();
        assert_eq!(soft_delete(&mut conn, e.id).await.unwrap(), 0);

        let result = update_workplace(&mut conn, e.id, w2).await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));
        assert!(find_by_id_any(&mut conn, e.id).await.unwrap().is_some());
    }
}

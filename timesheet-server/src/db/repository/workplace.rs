//! Workplace Repository

use super::{RepoError, RepoResult, soft_delete_row};
use shared::models::{Workplace, WorkplaceCreate};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, name, office_id, work_type, created_at, updated_at";

pub async fn create(conn: &mut SqliteConnection, data: &WorkplaceCreate) -> RepoResult<Workplace> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO workplace (name, office_id, work_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.office_id)
    .bind(data.work_type)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create workplace".into()))
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Workplace>> {
    let sql = format!("SELECT {COLUMNS} FROM workplace WHERE id = ? AND deleted_at IS NULL");
    let workplace = sqlx::query_as::<_, Workplace>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(workplace)
}

pub async fn find_by_id_any(
    conn: &mut SqliteConnection,
    id: i64,
) -> RepoResult<Option<Workplace>> {
    let sql = format!("SELECT {COLUMNS} FROM workplace WHERE id = ?");
    let workplace = sqlx::query_as::<_, Workplace>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(workplace)
}

pub async fn list_by_office(
    conn: &mut SqliteConnection,
    office_id: i64,
) -> RepoResult<Vec<Workplace>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM workplace WHERE office_id = ? AND deleted_at IS NULL ORDER BY id"
    );
    let workplaces = sqlx::query_as::<_, Workplace>(&sql)
        .bind(office_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(workplaces)
}

pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    soft_delete_row(conn, "workplace", id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{office, testing::test_pool};
    use shared::models::WorkType;

    #[tokio::test]
    async fn test_list_by_office_skips_deleted() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let o = office::create(&mut conn, "O1").await.unwrap();

        let w1 = create(
            &mut conn,
            &WorkplaceCreate {
                name: "Kitchen".into(),
                office_id: o.id,
                work_type: WorkType::Hours,
            },
        )
        .await
        .unwrap();
        let w2 = create(
            &mut conn,
            &WorkplaceCreate {
                name: "Front".into(),
                office_id: o.id,
                work_type: WorkType::Time,
            },
        )
        .await
        .unwrap();
        assert_eq!(w2.work_type, WorkType::Time);

        soft_delete(&mut conn, w1.id).await.unwrap();
        let listed = list_by_office(&mut conn, o.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, w2.id);
    }

    #[tokio::test]
    async fn test_unknown_office_is_rejected_by_foreign_key() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let result = create(
            &mut conn,
            &WorkplaceCreate {
                name: "Orphan".into(),
                office_id: 42,
                work_type: WorkType::Hours,
            },
        )
        .await;
        assert!(matches!(result, Err(RepoError::Database(_))));
    }
}

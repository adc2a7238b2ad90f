//! Office Repository

use super::{RepoError, RepoResult, soft_delete_row};
use shared::models::Office;
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub async fn create(conn: &mut SqliteConnection, name: &str) -> RepoResult<Office> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO office (name, created_at, updated_at) VALUES (?1, ?2, ?2) RETURNING id",
    )
    .bind(name)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create office".into()))
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Office>> {
    let sql = format!("SELECT {COLUMNS} FROM office WHERE id = ? AND deleted_at IS NULL");
    let office = sqlx::query_as::<_, Office>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(office)
}

pub async fn find_by_id_any(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Office>> {
    let sql = format!("SELECT {COLUMNS} FROM office WHERE id = ?");
    let office = sqlx::query_as::<_, Office>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(office)
}

pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    soft_delete_row(conn, "office", id).await
}

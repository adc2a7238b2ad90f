//! Repository Module
//!
//! CRUD + soft delete for every entity. Functions take a plain
//! `&mut SqliteConnection`, so callers pass either a pooled connection
//! (`&mut conn`) or an open transaction (`&mut tx`) and decide atomicity.
//!
//! Reads named `find_*`/`list_*` only see live rows. `find_by_id_any`
//! also returns soft-deleted rows; it exists for delete targets.

pub mod employee;
pub mod office;
pub mod user;
pub mod work_entry;
pub mod workplace;

use sqlx::SqliteConnection;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already deleted: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Set `deleted_at` on a live row.
///
/// Zero affected rows means the row is missing (`NotFound`) or was deleted
/// before (`Conflict`); a second query tells the two apart.
pub(crate) async fn soft_delete_row(
    conn: &mut SqliteConnection,
    table: &'static str,
    id: i64,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let sql = format!(
        "UPDATE {table} SET deleted_at = ?1, updated_at = ?1 WHERE id = ?2 AND deleted_at IS NULL"
    );
    let rows = sqlx::query(&sql)
        .bind(now)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() > 0 {
        return Ok(());
    }

    let sql = format!("SELECT COUNT(*) FROM {table} WHERE id = ?");
    let count: i64 = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    if count > 0 {
        Err(RepoError::Conflict(format!("{table} {id}")))
    } else {
        Err(RepoError::NotFound(format!("{table} {id}")))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::db::DbService;
    use sqlx::SqlitePool;

    /// In-memory pool with the full schema applied
    pub async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }
}

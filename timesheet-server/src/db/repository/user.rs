//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{Role, User};
use sqlx::SqliteConnection;

const COLUMNS: &str =
    "id, office_id, name, password_hash, role, employee_id, created_at, updated_at";

/// Insert parameters; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub office_id: i64,
    pub name: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
    pub employee_id: Option<i64>,
}

pub async fn create(conn: &mut SqliteConnection, data: &NewUser<'_>) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user_account (office_id, name, password_hash, role, employee_id, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) RETURNING id",
    )
    .bind(data.office_id)
    .bind(data.name)
    .bind(data.password_hash)
    .bind(data.role)
    .bind(data.employee_id)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {COLUMNS} FROM user_account WHERE id = ? AND deleted_at IS NULL");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

/// Live user with this id inside this office
pub async fn find_in_office(
    conn: &mut SqliteConnection,
    office_id: i64,
    id: i64,
) -> RepoResult<Option<User>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM user_account WHERE id = ? AND office_id = ? AND deleted_at IS NULL"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(office_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

pub async fn update_password(
    conn: &mut SqliteConnection,
    id: i64,
    password_hash: &str,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE user_account SET password_hash = ?1, updated_at = ?2 WHERE id = ?3 AND deleted_at IS NULL",
    )
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("user {id}")));
    }
    Ok(())
}

//! Login: password check and access token issue
//!
//! Every failure (unknown user, other office, wrong password, deleted
//! office or employee link) answers with the same `InvalidCredentials` error.

use shared::error::AppError;
use shared::models::{LoginRequest, LoginResponse, UserInfo};
use sqlx::SqlitePool;

use super::{ServiceError, ServiceResult};
use crate::auth::{JwtService, password};
use crate::db::repository;
use crate::security_log;

fn rejected(req: &LoginRequest, reason: &str) -> ServiceError {
    security_log!(
        "WARN",
        "login_failed",
        office_id = req.office_id,
        user_id = req.user_id,
        reason = reason
    );
    AppError::invalid_credentials().into()
}

pub async fn login(
    pool: &SqlitePool,
    jwt_service: &JwtService,
    req: LoginRequest,
) -> ServiceResult<LoginResponse> {
    let mut conn = pool.acquire().await?;
    let Some(user) = repository::user::find_in_office(&mut conn, req.office_id, req.user_id).await?
    else {
        return Err(rejected(&req, "unknown user"));
    };
    if repository::office::find_by_id(&mut conn, user.office_id).await?.is_none() {
        return Err(rejected(&req, "office deleted"));
    }

    match password::verify_password(&req.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return Err(rejected(&req, "wrong password")),
        Err(e) => {
            tracing::error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
            return Err(rejected(&req, "bad hash"));
        }
    }

    let workplace_id = match user.employee_id {
        Some(employee_id) => {
            let Some(employee) = repository::employee::find_by_id(&mut conn, employee_id).await?
            else {
                return Err(rejected(&req, "employee deleted"));
            };
            if repository::workplace::find_by_id(&mut conn, employee.workplace_id)
                .await?
                .is_none()
            {
                return Err(rejected(&req, "workplace deleted"));
            }
            Some(employee.workplace_id)
        }
        None => None,
    };

    let info = UserInfo {
        user_id: user.id,
        office_id: user.office_id,
        workplace_id,
        employee_id: user.employee_id,
        name: user.name,
        role: user.role,
    };
    let token = jwt_service
        .generate_token(&info)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = info.user_id,
        office_id = info.office_id,
        role = info.role.as_str(),
        "User logged in successfully"
    );

    Ok(LoginResponse { token, user: info })
}

//! User API Handlers

use axum::{Json, extract::State};
use shared::models::{EmployeeWithUser, EmployeeWithUserCreate, User, UserCreate};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::user;
use crate::utils::{ApiResponse, AppResult, ok};

pub async fn create(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<ApiResponse<User>>> {
    Ok(ok(user::create_user(state.get_pool(), &identity, payload).await?))
}

/// Employee and its login user in one transaction
pub async fn create_with_employee(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<EmployeeWithUserCreate>,
) -> AppResult<Json<ApiResponse<EmployeeWithUser>>> {
    Ok(ok(
        user::create_employee_with_user(state.get_pool(), &identity, payload).await?,
    ))
}

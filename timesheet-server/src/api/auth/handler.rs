//! Authentication Handlers

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse};

use crate::core::ServerState;
use crate::services::login;
use crate::utils::{ApiResponse, AppResult, ok};

/// Login handler
///
/// Verifies `(office_id, user_id, password)` and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = login::login(state.get_pool(), &state.get_jwt_service(), req).await?;
    Ok(ok(resp))
}

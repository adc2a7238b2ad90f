//! Office API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Office, OfficeCreate, Workplace};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::{office, workplace};
use crate::utils::{ApiResponse, AppResult, ok};

/// The caller's own office
pub async fn list(
    State(state): State<ServerState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<Vec<Office>>>> {
    Ok(ok(office::list_offices(state.get_pool(), &identity).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<OfficeCreate>,
) -> AppResult<Json<ApiResponse<Office>>> {
    Ok(ok(office::create_office(state.get_pool(), &identity, payload).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    office::delete_office(state.get_pool(), &identity, id).await?;
    Ok(ok(()))
}

pub async fn list_workplaces(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Workplace>>>> {
    Ok(ok(workplace::list_workplaces(state.get_pool(), &identity, id).await?))
}

//! Workplace API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, Workplace, WorkplaceCreate};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::{employee, workplace};
use crate::utils::{ApiResponse, AppResult, ok};

/// Workplaces of the caller's office
pub async fn list(
    State(state): State<ServerState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<Vec<Workplace>>>> {
    let office_id = identity.office_id;
    Ok(ok(workplace::list_workplaces(state.get_pool(), &identity, office_id).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Workplace>>> {
    Ok(ok(workplace::get_workplace(state.get_pool(), &identity, id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<WorkplaceCreate>,
) -> AppResult<Json<ApiResponse<Workplace>>> {
    Ok(ok(workplace::create_workplace(state.get_pool(), &identity, payload).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    workplace::delete_workplace(state.get_pool(), &identity, id).await?;
    Ok(ok(()))
}

pub async fn list_employees(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    Ok(ok(employee::list_employees(state.get_pool(), &identity, id).await?))
}

//! Work Entry API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{WorkEntry, WorkEntryInput, WorkEntryView};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::work_entry;
use crate::utils::{ApiResponse, AppResult, ok};

/// All entries of the caller's office (admin only)
pub async fn list(
    State(state): State<ServerState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<Vec<WorkEntryView>>>> {
    let office_id = identity.office_id;
    Ok(ok(
        work_entry::list_work_entries_by_office(state.get_pool(), &identity, office_id).await?,
    ))
}

pub async fn list_by_workplace(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<WorkEntryView>>>> {
    Ok(ok(
        work_entry::list_work_entries_by_workplace(state.get_pool(), &identity, id).await?,
    ))
}

pub async fn list_by_employee(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<WorkEntryView>>>> {
    Ok(ok(
        work_entry::list_work_entries_by_employee(state.get_pool(), &identity, id).await?,
    ))
}

pub async fn create(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<WorkEntryInput>,
) -> AppResult<Json<ApiResponse<WorkEntry>>> {
    Ok(ok(work_entry::create_work_entry(state.get_pool(), &identity, payload).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    work_entry::delete_work_entry(state.get_pool(), &identity, id).await?;
    Ok(ok(()))
}

//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, EmployeeCreate, EmployeeTransfer};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::employee;
use crate::utils::{ApiResponse, AppResult, ok};

/// Employees of the caller's office
pub async fn list(
    State(state): State<ServerState>,
    identity: Identity,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let office_id = identity.office_id;
    Ok(ok(
        employee::list_employees_by_office(state.get_pool(), &identity, office_id).await?,
    ))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    Ok(ok(employee::get_employee(state.get_pool(), &identity, id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    identity: Identity,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    Ok(ok(employee::create_employee(state.get_pool(), &identity, payload).await?))
}

/// Move the employee to another workplace
pub async fn transfer(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeTransfer>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee =
        employee::transfer_employee(state.get_pool(), &identity, id, payload.workplace_id).await?;
    Ok(ok(employee))
}

/// Soft-delete the employee and all of its entries
pub async fn delete(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    employee::delete_employee(state.get_pool(), &identity, id).await?;
    Ok(ok(()))
}

//! Report API Module
//!
//! `GET /api/reports/workplace/{id}?year=2024&month=1`

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use shared::models::{ReportQuery, ReportRow};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::services::report;
use crate::utils::{ApiResponse, AppResult, ok};

/// Report router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reports/workplace/{id}", get(monthly))
}

async fn monthly(
    State(state): State<ServerState>,
    identity: Identity,
    Path(id): Path<i64>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ApiResponse<Vec<ReportRow>>>> {
    Ok(ok(report::monthly_report(state.get_pool(), &identity, id, query).await?))
}

//! Workplace API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Workplace router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/workplaces", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/employees", get(handler::list_employees))
}

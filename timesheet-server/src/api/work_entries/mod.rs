//! Work Entry API Module

mod handler;

use axum::{Router, routing::delete, routing::get};

use crate::core::ServerState;

/// Work entry router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/work_entries", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/workplace/{id}", get(handler::list_by_workplace))
        .route("/employee/{id}", get(handler::list_by_employee))
        .route("/{id}", delete(handler::delete))
}

//! Office API Module

mod handler;

use axum::{Router, routing::get, routing::delete};

use crate::core::ServerState;

/// Office router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/offices", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
        .route("/{id}/workplaces", get(handler::list_workplaces))
}

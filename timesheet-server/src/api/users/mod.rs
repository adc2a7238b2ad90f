//! User API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// User router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/users", post(handler::create))
        .route("/api/users/with_employee", post(handler::create_with_employee))
}

//! Authentication Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// `/api/login` is the only public `/api/` route
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/login", post(handler::login))
}

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - `/ping`, `/db-ping`
//! - [`auth`] - 登录
//! - [`offices`] - 办公室
//! - [`workplaces`] - 工作地点
//! - [`employees`] - 员工
//! - [`users`] - 登录用户
//! - [`work_entries`] - 工时记录
//! - [`reports`] - 月度报表

pub mod auth;
pub mod employees;
pub mod health;
pub mod offices;
pub mod reports;
pub mod users;
pub mod work_entries;
pub mod workplaces;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_routes() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Auth API - /api/login is public
        .merge(auth::router())
        // Data APIs - authentication required
        .merge(offices::router())
        .merge(workplaces::router())
        .merge(employees::router())
        .merge(users::router())
        .merge(work_entries::router())
        .merge(reports::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by router tests
pub fn build_router(state: ServerState) -> Router {
    build_routes()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // JWT authentication - injects Identity before routes run
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
        .with_state(state)
}

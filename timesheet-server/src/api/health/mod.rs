//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /ping | GET | 进程存活 | 无 |
//! | /db-ping | GET | 执行 `SELECT 1` | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ok};

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/db-ping", get(db_ping))
}

#[derive(Serialize)]
pub struct PingResponse {
    status: &'static str,
    version: &'static str,
}

async fn ping() -> Json<ApiResponse<PingResponse>> {
    ok(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn db_ping(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<PingResponse>>> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.get_pool())
        .await
        .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
    Ok(ok(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

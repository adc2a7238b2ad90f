//! 统一错误处理
//!
//! 错误类型全部来自 `shared::error`，这里只做 re-export 和响应包装。
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Workplace 3"))
//!
//! // 返回成功响应
//! Ok(ok(workplace))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode, ErrorKind};

/// Wrap data in a success envelope
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

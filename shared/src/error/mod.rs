//! Unified error system for the timesheet backend
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: Caller-facing taxonomy (unauthenticated, forbidden, ...)
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Office / workplace errors
//! - 4xxx: Work entry errors
//! - 8xxx: Employee / user errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::WorkplaceNotFound);
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//!
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "name");
//!
//! let response = ApiResponse::failure(&err);
//! ```

mod category;
mod codes;
mod http;
mod kind;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use kind::ErrorKind;
pub use types::{ApiResponse, AppError, Details};

//! Shared types for the timesheet backend
//!
//! Domain models, the error-code system and time helpers used by the server
//! and by API clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

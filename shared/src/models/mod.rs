//! Data models
//!
//! Shared between the server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;
pub mod office;
pub mod user;
pub mod work_entry;
pub mod workplace;

// Re-exports
pub use employee::*;
pub use office::*;
pub use user::*;
pub use work_entry::*;
pub use workplace::*;

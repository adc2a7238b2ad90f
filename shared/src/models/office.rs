//! Office Model

use serde::{Deserialize, Serialize};

/// Office entity (tenant root)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Office {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create office payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeCreate {
    pub name: String,
}

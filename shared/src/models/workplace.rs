//! Workplace Model

use serde::{Deserialize, Serialize};

/// Work recording mode, fixed per workplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum WorkType {
    /// Integer hour count per day
    Hours,
    /// Clock-in / clock-out pair
    Time,
    /// Presence flag
    Attendance,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Time => "time",
            Self::Attendance => "attendance",
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workplace entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Workplace {
    pub id: i64,
    pub name: String,
    pub office_id: i64,
    pub work_type: WorkType,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create workplace payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkplaceCreate {
    pub name: String,
    pub office_id: i64,
    pub work_type: WorkType,
}

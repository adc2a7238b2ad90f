//! Work Entry Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::workplace::WorkType;

/// Recorded work, exactly one shape per entry
///
/// Serialized with a `work_type` tag next to the shape's own fields:
///
/// ```json
/// { "work_type": "hours", "hours": 8 }
/// { "work_type": "time", "start_time": "2024-01-05T08:00:00.000Z", "end_time": "2024-01-05T17:00:00.000Z" }
/// { "work_type": "attendance" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "work_type", rename_all = "lowercase")]
pub enum WorkPayload {
    Hours {
        hours: i16,
    },
    Time {
        #[serde(with = "entry_time")]
        start_time: DateTime<Utc>,
        #[serde(with = "entry_time")]
        end_time: DateTime<Utc>,
    },
    Attendance,
}

impl WorkPayload {
    pub fn work_type(&self) -> WorkType {
        match self {
            Self::Hours { .. } => WorkType::Hours,
            Self::Time { .. } => WorkType::Time,
            Self::Attendance => WorkType::Attendance,
        }
    }
}

/// Work entry entity (immutable once created)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: i64,
    pub employee_id: i64,
    pub workplace_id: i64,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub payload: WorkPayload,
    pub comment: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create work entry payload, as posted by clients
///
/// The fields that must be present depend on the workplace's work type;
/// the server rejects input that does not match instead of defaulting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkEntryInput {
    pub employee_id: i64,
    pub workplace_id: i64,
    /// `YYYY-MM-DDTHH:MM:SS.sss±HH:MM`
    pub date: String,
    #[serde(default)]
    pub hours: Option<i64>,
    /// `YYYY-MM-DDTHH:MM:SS.sssZ`
    #[serde(default)]
    pub start_time: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SS.sssZ`
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub attendance: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Listing row: entry joined with display names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntryView {
    #[serde(flatten)]
    pub entry: WorkEntry,
    pub employee_name: String,
    pub workplace_name: String,
}

/// Monthly report query
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportQuery {
    pub year: i32,
    pub month: u32,
}

/// One exported line of the monthly report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub employee_name: String,
    pub date: NaiveDate,
    pub hours: i64,
}

/// Serde adapter for the fixed clock-in/out text format
pub mod entry_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::util::{format_entry_time, parse_entry_time};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_entry_time(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_entry_time(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid entry time: {s}")))
    }
}

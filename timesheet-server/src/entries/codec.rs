//! Work-entry codec
//!
//! Turns a client [`WorkEntryInput`] into a validated [`EncodedEntry`] for the
//! workplace's [`WorkType`]. Only the fields that work type needs are read;
//! missing ones are rejected, never defaulted.

use chrono::{DateTime, NaiveDate, Utc};
use shared::error::{AppError, ErrorCode};
use shared::models::{WorkEntryInput, WorkPayload, WorkType};
use shared::util::{parse_entry_date, parse_entry_time};
use thiserror::Error;

/// Longest accepted comment, in characters
pub const MAX_COMMENT_CHARS: usize = 500;

const MICROS_PER_HOUR: i64 = 3_600_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("{0} entries need {1}")]
    WorkTypeMismatch(WorkType, &'static str),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("hours must be between 1 and 32767, got {0}")]
    InvalidHours(i64),

    #[error("attendance must be true")]
    AttendanceNotSet,

    #[error("comment longer than {MAX_COMMENT_CHARS} characters")]
    CommentTooLong,
}

impl CodecError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::WorkTypeMismatch(..) | Self::AttendanceNotSet => ErrorCode::WorkTypeMismatch,
            Self::InvalidDate(_) => ErrorCode::InvalidDate,
            Self::InvalidTime(_) => ErrorCode::InvalidTime,
            Self::InvalidHours(_) => ErrorCode::InvalidHours,
            Self::CommentTooLong => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Validated entry, ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry {
    pub date: NaiveDate,
    pub payload: WorkPayload,
    pub comment: Option<String>,
}

pub fn encode(input: &WorkEntryInput, work_type: WorkType) -> Result<EncodedEntry, CodecError> {
    let date =
        parse_entry_date(&input.date).ok_or_else(|| CodecError::InvalidDate(input.date.clone()))?;

    let payload = match work_type {
        WorkType::Hours => encode_hours(input.hours)?,
        WorkType::Time => encode_time(input.start_time.as_deref(), input.end_time.as_deref())?,
        WorkType::Attendance => match input.attendance {
            Some(true) => WorkPayload::Attendance,
            Some(false) => return Err(CodecError::AttendanceNotSet),
            None => return Err(CodecError::WorkTypeMismatch(work_type, "attendance")),
        },
    };

    Ok(EncodedEntry {
        date,
        payload,
        comment: normalize_comment(input.comment.as_deref())?,
    })
}

fn encode_hours(hours: Option<i64>) -> Result<WorkPayload, CodecError> {
    let hours = hours.ok_or(CodecError::WorkTypeMismatch(WorkType::Hours, "hours"))?;
    match i16::try_from(hours) {
        Ok(h) if h > 0 => Ok(WorkPayload::Hours { hours: h }),
        _ => Err(CodecError::InvalidHours(hours)),
    }
}

fn encode_time(start: Option<&str>, end: Option<&str>) -> Result<WorkPayload, CodecError> {
    let (Some(start), Some(end)) = (
        start.filter(|s| !s.is_empty()),
        end.filter(|s| !s.is_empty()),
    ) else {
        return Err(CodecError::WorkTypeMismatch(
            WorkType::Time,
            "start_time and end_time",
        ));
    };

    Ok(WorkPayload::Time {
        start_time: parse_time(start)?,
        end_time: parse_time(end)?,
    })
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, CodecError> {
    parse_entry_time(s).ok_or_else(|| CodecError::InvalidTime(s.to_string()))
}

fn normalize_comment(comment: Option<&str>) -> Result<Option<String>, CodecError> {
    let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    if comment.chars().count() > MAX_COMMENT_CHARS {
        return Err(CodecError::CommentTooLong);
    }
    Ok(Some(comment.to_string()))
}

/// Whole hours between two instants, truncated toward zero
///
/// End before start gives a negative value.
pub fn duration_hours(start: &DateTime<Utc>, end: &DateTime<Utc>) -> i64 {
    (end.timestamp_micros() - start.timestamp_micros()) / MICROS_PER_HOUR
}

/// Hours a payload contributes to a report
pub fn reported_hours(payload: &WorkPayload) -> i64 {
    match payload {
        WorkPayload::Hours { hours } => i64::from(*hours),
        WorkPayload::Time {
            start_time,
            end_time,
        } => duration_hours(start_time, end_time),
        WorkPayload::Attendance => 0,
    }
}

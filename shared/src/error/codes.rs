//! Unified error codes for the timesheet backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Office / workplace errors
//! - 4xxx: Work entry errors
//! - 8xxx: Employee / user errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Target was already soft-deleted
    AlreadyDeleted = 9,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (office/user/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,
    /// Target belongs to another office
    OfficeMismatch = 2010,
    /// Target belongs to another workplace
    WorkplaceMismatch = 2011,
    /// Target is another employee
    EmployeeMismatch = 2012,

    // ==================== 3xxx: Office / Workplace ====================
    /// Office not found
    OfficeNotFound = 3001,
    /// Workplace not found
    WorkplaceNotFound = 3101,
    /// Workplace declared for an office other than the caller's
    CrossOfficeWorkplace = 3102,

    // ==================== 4xxx: Work entry ====================
    /// Work entry not found
    WorkEntryNotFound = 4001,
    /// Payload does not match the workplace work type
    WorkTypeMismatch = 4002,
    /// Date is not in the expected format
    InvalidDate = 4003,
    /// Start/end time is not in the expected format
    InvalidTime = 4004,
    /// Hours must be a positive count
    InvalidHours = 4005,
    /// Entry workplace differs from the employee's workplace
    EntryWorkplaceMismatch = 4006,
    /// Report month out of range
    InvalidMonth = 4007,

    // ==================== 8xxx: Employee / User ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// User not found
    UserNotFound = 8002,
    /// Manager and employee users need a linked employee
    UserEmployeeRequired = 8003,
    /// Admin users cannot be linked to an employee
    UserEmployeeNotAllowed = 8004,
    /// Linked employee belongs to another office
    UserEmployeeOfficeMismatch = 8005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::AlreadyDeleted => "Resource has already been deleted",
            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid office, user or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::OfficeMismatch => "Your office is different",
            ErrorCode::WorkplaceMismatch => "Your workplace is different",
            ErrorCode::EmployeeMismatch => "You can only access your own records",
            // Office / Workplace
            ErrorCode::OfficeNotFound => "Office not found",
            ErrorCode::WorkplaceNotFound => "Workplace not found",
            ErrorCode::CrossOfficeWorkplace => "Workplace must belong to your own office",
            // Work entry
            ErrorCode::WorkEntryNotFound => "Work entry not found",
            ErrorCode::WorkTypeMismatch => "Input does not match the workplace work type",
            ErrorCode::InvalidDate => "Invalid date format",
            ErrorCode::InvalidTime => "Invalid time format",
            ErrorCode::InvalidHours => "Hours must be a positive number",
            ErrorCode::EntryWorkplaceMismatch => "Workplace does not match the employee's workplace",
            ErrorCode::InvalidMonth => "Month must be between 1 and 12",
            // Employee / User
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmployeeRequired => "Manager and employee users require an employee",
            ErrorCode::UserEmployeeNotAllowed => "Admin users cannot be linked to an employee",
            ErrorCode::UserEmployeeOfficeMismatch => "Employee belongs to another office",
            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::AlreadyDeleted),
            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),
            2010 => Ok(ErrorCode::OfficeMismatch),
            2011 => Ok(ErrorCode::WorkplaceMismatch),
            2012 => Ok(ErrorCode::EmployeeMismatch),
            // Office / Workplace
            3001 => Ok(ErrorCode::OfficeNotFound),
            3101 => Ok(ErrorCode::WorkplaceNotFound),
            3102 => Ok(ErrorCode::CrossOfficeWorkplace),
            // Work entry
            4001 => Ok(ErrorCode::WorkEntryNotFound),
            4002 => Ok(ErrorCode::WorkTypeMismatch),
            4003 => Ok(ErrorCode::InvalidDate),
            4004 => Ok(ErrorCode::InvalidTime),
            4005 => Ok(ErrorCode::InvalidHours),
            4006 => Ok(ErrorCode::EntryWorkplaceMismatch),
            4007 => Ok(ErrorCode::InvalidMonth),
            // Employee / User
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::UserNotFound),
            8003 => Ok(ErrorCode::UserEmployeeRequired),
            8004 => Ok(ErrorCode::UserEmployeeNotAllowed),
            8005 => Ok(ErrorCode::UserEmployeeOfficeMismatch),
            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

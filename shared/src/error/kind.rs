//! Caller-facing error taxonomy
//!
//! Every [`ErrorCode`] collapses into exactly one [`ErrorKind`], so a client can
//! branch on authentication vs. authorization vs. validation vs. system failure
//! without knowing individual codes.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing, invalid or expired credential
    Unauthenticated,
    /// Authenticated but outside the caller's scope
    Forbidden,
    /// Entity or ownership-chain link absent
    NotFound,
    /// Malformed payload or a rejected business rule
    InvalidInput,
    /// Target already soft-deleted (or duplicated)
    Conflict,
    /// Storage or transaction failure
    Internal,
}

impl ErrorCode {
    /// Classify this code into the caller-facing taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => ErrorKind::Unauthenticated,

            Self::PermissionDenied
            | Self::AdminRequired
            | Self::OfficeMismatch
            | Self::WorkplaceMismatch
            | Self::EmployeeMismatch => ErrorKind::Forbidden,

            Self::NotFound
            | Self::OfficeNotFound
            | Self::WorkplaceNotFound
            | Self::WorkEntryNotFound
            | Self::EmployeeNotFound
            | Self::UserNotFound => ErrorKind::NotFound,

            Self::AlreadyDeleted => ErrorKind::Conflict,

            // Success never travels inside an AppError
            Self::Success
            | Self::Unknown
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => ErrorKind::Internal,

            Self::ValidationFailed
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::CrossOfficeWorkplace
            | Self::WorkTypeMismatch
            | Self::InvalidDate
            | Self::InvalidTime
            | Self::InvalidHours
            | Self::EntryWorkplaceMismatch
            | Self::InvalidMonth
            | Self::UserEmployeeRequired
            | Self::UserEmployeeNotAllowed
            | Self::UserEmployeeOfficeMismatch => ErrorKind::InvalidInput,
        }
    }
}

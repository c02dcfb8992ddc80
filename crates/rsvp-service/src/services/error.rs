//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use rsvp_common::AppError;
use rsvp_core::{DomainError, GuestField};
use std::fmt;

/// Shown when an RSVP could not be stored
pub const SUBMIT_FAILED_MESSAGE: &str = "We couldn't send your RSVP. Please try again.";

/// Shown when a check-in could not be stored
pub const CHECK_IN_FAILED_MESSAGE: &str = "We couldn't check in this guest. Please try again.";

/// Shown when the guest list could not be read
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load the guest list";

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (field validation, unknown guest, declined guest)
    Domain(DomainError),

    /// The gateway rejected a write; the backend detail was logged, not kept
    Persistence(&'static str),

    /// The gateway could not be read
    RosterUnavailable,

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Persistence(msg) => f.write_str(msg),
            Self::RosterUnavailable => f.write_str(LOAD_FAILED_MESSAGE),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    503
                }
            }
            Self::Persistence(_) | Self::RosterUnavailable => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::RosterUnavailable => "LOAD_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The offending request field, for field validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Domain(e) => e.field().map(GuestField::as_str),
            _ => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Persistence(msg) => AppError::unavailable(msg),
            ServiceError::RosterUnavailable => AppError::unavailable(LOAD_FAILED_MESSAGE),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

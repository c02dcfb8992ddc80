//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

use crate::value_objects::GuestId;

/// Input field of an RSVP that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestField {
    Name,
    Email,
    Phone,
    NumberOfGuests,
    Comments,
}

impl GuestField {
    /// Wire name of the field, as used in request bodies
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::NumberOfGuests => "number_of_guests",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guest not found: {0}")]
    GuestNotFound(GuestId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid {field}: {message}")]
    InvalidField { field: GuestField, message: String },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Guest {0} declined the invitation and cannot be checked in")]
    CannotCheckInDeclined(GuestId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Create a field validation error
    pub fn invalid_field(field: GuestField, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GuestNotFound(_) => "UNKNOWN_GUEST",
            Self::InvalidField { .. } => "VALIDATION_ERROR",
            Self::CannotCheckInDeclined(_) => "GUEST_DECLINED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<GuestField> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GuestNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField { .. })
    }

    /// Check if this is a conflict with the current record state
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CannotCheckInDeclined(_))
    }

    /// Check if this error originated in the storage backend
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

//! Error handling utilities for repositories

use rsvp_core::{DomainError, GuestId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Check violations included; every insert was validated as a `NewGuest` first.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "guest not found" error
pub fn guest_not_found(id: GuestId) -> DomainError {
    DomainError::GuestNotFound(id)
}

//! Guest ID - opaque identifier assigned by the guest gateway on insert
//!
//! Backed by a UUID so it matches the `uuid` primary key of the `guest_list`
//! table. Serialized as its hyphenated string form.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a guest record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(Uuid);

impl GuestId {
    /// Wrap an existing UUID
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random (v4) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, GuestIdParseError> {
        Uuid::parse_str(s.trim())
            .map(GuestId)
            .map_err(|_| GuestIdParseError::InvalidFormat)
    }
}

/// Error when parsing a GuestId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuestIdParseError {
    #[error("invalid guest id format")]
    InvalidFormat,
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for GuestId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<GuestId> for Uuid {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

impl std::str::FromStr for GuestId {
    type Err = GuestIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuestId::parse(s)
    }
}

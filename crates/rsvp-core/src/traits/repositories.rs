//! Repository traits (ports) - define the interface for data access
//!
//! The guest gateway is the only persistence the system needs: one logical
//! table of RSVP rows with insert, ordered read, and the check-in patch.
//! The infrastructure layer provides the implementations.

use async_trait::async_trait;

use crate::entities::{GuestRecord, NewGuest};
use crate::error::DomainError;
use crate::value_objects::GuestId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Ordering of guest records by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    /// Most recent first
    #[default]
    Descending,
}

impl SortOrder {
    /// SQL keyword for this ordering
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

// ============================================================================
// Guest Repository
// ============================================================================

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Insert a new RSVP; the gateway assigns `id` and `created_at`
    async fn insert(&self, guest: &NewGuest) -> RepoResult<GuestRecord>;

    /// Read every record ordered by `created_at`
    async fn find_all(&self, order: SortOrder) -> RepoResult<Vec<GuestRecord>>;

    /// Read one record by id
    ///
    /// The workflows only read the full roster; this lookup exists for the
    /// storage tests to inspect a single row after a write.
    async fn find_by_id(&self, id: GuestId) -> RepoResult<Option<GuestRecord>>;

    /// Set `attended = true` for one record
    ///
    /// Returns `DomainError::GuestNotFound` when no row has that id.
    async fn mark_attended(&self, id: GuestId) -> RepoResult<()>;

    /// Check that the backend is reachable
    async fn ping(&self) -> RepoResult<()>;
}

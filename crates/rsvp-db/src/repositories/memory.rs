//! In-memory implementation of GuestRepository

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use tracing::instrument;

use rsvp_core::traits::{GuestRepository, RepoResult, SortOrder};
use rsvp_core::{DomainError, GuestId, GuestRecord, NewGuest};

use super::error::guest_not_found;

#[derive(Default)]
struct Inner {
    /// Records in insertion order, which is also `created_at` order
    rows: RwLock<Vec<GuestRecord>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    calls: AtomicUsize,
}

/// Process-local guest store
///
/// Cloning shares the same store. Faults can be switched on to exercise
/// error paths, and every trait call is counted.
#[derive(Clone, Default)]
pub struct MemoryGuestRepository {
    inner: Arc<Inner>,
}

impl MemoryGuestRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `insert` and `mark_attended` fail until switched off
    pub fn fail_writes(&self, enabled: bool) {
        self.inner.fail_writes.store(enabled, Ordering::SeqCst);
    }

    /// Make `find_all`, `find_by_id` and `ping` fail until switched off
    pub fn fail_reads(&self, enabled: bool) {
        self.inner.fail_reads.store(enabled, Ordering::SeqCst);
    }

    /// Number of gateway calls served so far, failed ones included
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enter(&self, write: bool) -> RepoResult<()> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let flag = if write {
            &self.inner.fail_writes
        } else {
            &self.inner.fail_reads
        };
        if flag.load(Ordering::SeqCst) {
            let kind = if write { "write" } else { "read" };
            return Err(DomainError::DatabaseError(format!(
                "guest store unavailable ({kind})"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl GuestRepository for MemoryGuestRepository {
    #[instrument(skip(self, guest), fields(attending = guest.is_attending()))]
    async fn insert(&self, guest: &NewGuest) -> RepoResult<GuestRecord> {
        self.enter(true)?;

        let mut rows = self.inner.rows.write();

        // Keep created_at strictly increasing so ordering is total
        let mut created_at = Utc::now();
        if let Some(last) = rows.last() {
            if created_at <= last.created_at {
                created_at = last.created_at + Duration::microseconds(1);
            }
        }

        let record = GuestRecord::from_new(GuestId::generate(), guest, created_at);
        rows.push(record.clone());
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn find_all(&self, order: SortOrder) -> RepoResult<Vec<GuestRecord>> {
        self.enter(false)?;

        let rows = self.inner.rows.read();
        Ok(match order {
            SortOrder::Ascending => rows.clone(),
            SortOrder::Descending => rows.iter().rev().cloned().collect(),
        })
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GuestId) -> RepoResult<Option<GuestRecord>> {
        self.enter(false)?;

        Ok(self.inner.rows.read().iter().find(|r| r.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn mark_attended(&self, id: GuestId) -> RepoResult<()> {
        self.enter(true)?;

        let mut rows = self.inner.rows.write();
        let record = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| guest_not_found(id))?;
        record.check_in();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        self.enter(false)
    }
}

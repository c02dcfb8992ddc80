//! Roster service
//!
//! Loads the guest list for the host and checks guests in.

use rsvp_core::{DomainError, GuestId, GuestRecord, RosterView, SortOrder};
use tracing::{debug, error, info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult, CHECK_IN_FAILED_MESSAGE};

/// Result of a check-in request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The gateway recorded the check-in
    CheckedIn,
    /// The guest was already checked in; the gateway was not contacted
    AlreadyCheckedIn,
}

/// Stateless roster reads
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read every record, newest first, and aggregate it
    #[instrument(skip(self))]
    pub async fn load_roster(&self) -> ServiceResult<RosterView> {
        let records = self
            .ctx
            .guest_repo()
            .find_all(SortOrder::Descending)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to load guest list");
                ServiceError::RosterUnavailable
            })?;

        let view = RosterView::from_records(records);
        debug!(
            confirmed = view.stats.confirmed_count,
            declined = view.stats.declined_count,
            "Guest list loaded"
        );
        Ok(view)
    }
}

/// The host's view of the guest list
///
/// Owns one snapshot. A successful load replaces it wholesale; a check-in
/// patches it only after the gateway acknowledged the update.
#[derive(Debug, Default)]
pub struct RosterSession {
    snapshot: Option<RosterView>,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last loaded view, if any
    pub fn snapshot(&self) -> Option<&RosterView> {
        self.snapshot.as_ref()
    }

    /// Reload the snapshot; a failed load keeps the previous one
    pub async fn load(&mut self, ctx: &ServiceContext) -> ServiceResult<&RosterView> {
        let view = RosterService::new(ctx).load_roster().await?;
        Ok(self.snapshot.insert(view))
    }

    /// Check one attending guest in
    ///
    /// An id missing from the snapshot triggers one reload, since the guest may
    /// have replied after the last load.
    #[instrument(skip(self, ctx))]
    pub async fn mark_attended(
        &mut self,
        ctx: &ServiceContext,
        id: GuestId,
    ) -> ServiceResult<CheckInOutcome> {
        if self.find(id).is_none() {
            self.load(ctx).await?;
        }

        let guest = self
            .find(id)
            .ok_or(ServiceError::Domain(DomainError::GuestNotFound(id)))?;
        if !guest.attending {
            return Err(DomainError::CannotCheckInDeclined(id).into());
        }
        if guest.is_checked_in() {
            debug!(guest_id = %id, "Guest already checked in");
            return Ok(CheckInOutcome::AlreadyCheckedIn);
        }

        ctx.guest_repo().mark_attended(id).await.map_err(|e| {
            if e.is_not_found() {
                ServiceError::Domain(e)
            } else {
                error!(guest_id = %id, error = %e, "Failed to check guest in");
                ServiceError::Persistence(CHECK_IN_FAILED_MESSAGE)
            }
        })?;

        if let Some(view) = self.snapshot.as_mut() {
            view.check_in(id);
        }
        info!(guest_id = %id, "Guest checked in");
        Ok(CheckInOutcome::CheckedIn)
    }

    fn find(&self, id: GuestId) -> Option<&GuestRecord> {
        self.snapshot.as_ref().and_then(|view| view.find(id))
    }
}

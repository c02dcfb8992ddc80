//! Service context - dependency container for services
//!
//! Holds the guest gateway and the event details.

use std::sync::Arc;

use rsvp_common::EventConfig;
use rsvp_core::traits::GuestRepository;
use rsvp_core::EventDetails;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    guest_repo: Arc<dyn GuestRepository>,
    event: Arc<EventDetails>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(guest_repo: Arc<dyn GuestRepository>, event: EventDetails) -> Self {
        Self {
            guest_repo,
            event: Arc::new(event),
        }
    }

    /// Get the guest gateway
    pub fn guest_repo(&self) -> &dyn GuestRepository {
        self.guest_repo.as_ref()
    }

    /// Get the event details
    pub fn event(&self) -> &EventDetails {
        self.event.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("guest_repo", &"dyn GuestRepository")
            .field("event", &self.event.title)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    guest_repo: Option<Arc<dyn GuestRepository>>,
    event: Option<EventDetails>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guest_repo(mut self, repo: Arc<dyn GuestRepository>) -> Self {
        self.guest_repo = Some(repo);
        self
    }

    pub fn event(mut self, event: EventDetails) -> Self {
        self.event = Some(event);
        self
    }

    /// Build the ServiceContext
    ///
    /// Event details fall back to the configured defaults when not set.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the guest gateway is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        let guest_repo = self
            .guest_repo
            .ok_or_else(|| super::error::ServiceError::internal("guest_repo is required"))?;
        let event = self
            .event
            .unwrap_or_else(|| EventConfig::default().to_details());

        Ok(ServiceContext::new(guest_repo, event))
    }
}

#[cfg(test)]
mod tests {
    use rsvp_db::MemoryGuestRepository;

    use super::*;

    #[test]
    fn test_builder_requires_gateway() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_builder_defaults_event() {
        let ctx = ServiceContextBuilder::new()
            .guest_repo(Arc::new(MemoryGuestRepository::new()))
            .build()
            .unwrap();
        assert_eq!(ctx.event().venue, "Jummpark");
    }
}

//! Business logic services
//!
//! The submission workflow and the guest roster aggregator, both talking to
//! the guest gateway held by [`ServiceContext`].

pub mod context;
pub mod error;
pub mod roster;
pub mod rsvp;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use roster::{CheckInOutcome, RosterService, RosterSession};
pub use rsvp::RsvpService;

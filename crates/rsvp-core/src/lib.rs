//! # rsvp-core
//!
//! Domain layer containing guest records, roster aggregation, value objects and
//! the guest gateway trait. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{EventDetails, GuestRecord, NewGuest, RosterStats, RosterView};
pub use error::{DomainError, GuestField};
pub use traits::{GuestRepository, RepoResult, SortOrder};
pub use value_objects::{Email, GuestId, GuestIdParseError, GuestName, PartySize};

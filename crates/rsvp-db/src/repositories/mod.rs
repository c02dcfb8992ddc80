//! Repository implementations
//!
//! Adapters for the guest gateway port defined in rsvp-core.

mod error;
mod guest;
mod memory;

pub use guest::PgGuestRepository;
pub use memory::MemoryGuestRepository;

//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod event;
pub mod guests;
pub mod health;
pub mod rsvp;

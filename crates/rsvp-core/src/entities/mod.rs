//! Domain entities - core business objects

mod event;
mod guest;
mod roster;

pub use event::EventDetails;
pub use guest::{GuestRecord, NewGuest};
pub use roster::{RosterStats, RosterView};

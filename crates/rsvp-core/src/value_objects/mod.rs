//! Value objects - validated types that represent domain concepts

mod email;
mod guest_id;
mod guest_name;
mod party_size;

pub use email::Email;
pub use guest_id::{GuestId, GuestIdParseError};
pub use guest_name::GuestName;
pub use party_size::PartySize;

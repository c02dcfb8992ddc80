//! Entity <-> model mappers

mod guest;

pub use guest::GuestInsert;

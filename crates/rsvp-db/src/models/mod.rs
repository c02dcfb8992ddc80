//! Database models with SQLx `FromRow` derives

mod guest;

pub use guest::GuestModel;

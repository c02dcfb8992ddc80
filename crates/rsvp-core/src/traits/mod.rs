//! Domain traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{GuestRepository, RepoResult, SortOrder};

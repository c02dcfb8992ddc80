//! # rsvp-db
//!
//! Storage layer implementing the guest gateway port.
//!
//! ## Overview
//!
//! Two adapters implement [`rsvp_core::GuestRepository`]:
//!
//! - [`PgGuestRepository`]: the `guest_list` table in PostgreSQL via SQLx
//! - [`MemoryGuestRepository`]: a process-local store with fault injection,
//!   used for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rsvp_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use rsvp_db::repositories::PgGuestRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let guests = PgGuestRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{MemoryGuestRepository, PgGuestRepository};

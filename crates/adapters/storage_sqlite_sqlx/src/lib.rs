//! # fleetbill-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `fleetbill-app::ports`
//! - Manage the `SQLite` connection pool lifecycle
//! - Optionally apply the embedded schema migration (development and tests;
//!   production schemas are owned upstream)
//! - Map between database rows and domain types
//!
//! ## Dependency rule
//! Depends on `fleetbill-app` (for port traits) and `fleetbill-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod billing_repo;
mod consumption_repo;
mod error;
mod pool;

pub use billing_repo::SqliteBillingRepository;
pub use consumption_repo::SqliteConsumptionRepository;
pub use error::StorageError;
pub use pool::{Config, Database};

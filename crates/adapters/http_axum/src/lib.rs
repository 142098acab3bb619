//! # fleetbill-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **billing JSON API** under `/api/billing`
//!   (`/totalCost`, `/totalCost/{deviceId}`, `/utilizationStats`,
//!   `/switchUtilizationStats`)
//! - Validate query and path parameters before any repository is touched
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `fleetbill-app` (for port traits and services) and `fleetbill-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

//! # fleetbill-domain
//!
//! Pure domain model for the fleet billing query service.
//!
//! ## Responsibilities
//! - Foundational types: billing periods, device identifiers, calculation types
//! - Error taxonomy shared by every layer (validation, not found, storage)
//! - Read models returned to clients: total and per-device cost, utilization
//!   statistics, switch utilization reports
//! - The single piece of derived logic: the utilization percentage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod period;

pub mod billing;
pub mod calculation;
pub mod utilization;

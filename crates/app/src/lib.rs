//! # fleetbill-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BillingRepository` — reads over `billing_summary`
//!   - `ConsumptionRepository` — reads over `device_consumption`
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BillingService` — monthly total cost, per-device cost
//!   - `UtilizationService` — device utilization, switch utilization report
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `fleetbill-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

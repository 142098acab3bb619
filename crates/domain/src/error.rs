//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FleetBillError`] via `#[from]`. The `Display` output of the validation
//! and not-found variants is the exact message returned to HTTP clients.

/// Top-level error for every billing query.
#[derive(Debug, thiserror::Error)]
pub enum FleetBillError {
    /// A request parameter is missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup that expects exactly one row found none.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Invalid or missing request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `month` is absent or not a `YYYY-MM` value.
    #[error("Month is required in YYYY-MM format")]
    Month,

    /// The utilization endpoint needs both identifiers.
    #[error("Both 'month' and 'deviceId' are required")]
    MonthAndDevice,

    /// A device identifier did not parse as an integer.
    #[error("deviceId must be an integer")]
    DeviceId,

    /// Unknown calculation type literal.
    #[error("calculationType must be 'Group' or 'Individual'")]
    CalculationType,

    /// The query string or path could not be decoded at all.
    #[error("{0}")]
    Malformed(String),
}

/// A lookup returned zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Device not found")]
    Device,

    #[error("Consumed data not found for this device")]
    ConsumedData,

    #[error("Capacity data not found for this device")]
    CapacityData,
}

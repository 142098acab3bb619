//! Billing read models returned by the cost endpoints.

use serde::Serialize;

use crate::id::DeviceId;

/// Sum of `total_charges` for one month and calculation type.
///
/// `total_cost` is `None` when no row matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCost {
    pub total_cost: Option<f64>,
}

/// Charges billed to a single device for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCost {
    pub device_id: DeviceId,
    pub total_cost: f64,
}

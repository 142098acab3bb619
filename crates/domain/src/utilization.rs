//! Utilization read models — consumed vs. allocated capacity per device.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::period::YearMonth;

/// Consumed storage for a device in one month, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConsumedUsage {
    pub consumed_gib: Option<f64>,
}

/// Allocated capacity and, for switches, the number of ports in use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceCapacity {
    pub capacity: Option<f64>,
    pub ports_used: Option<i64>,
}

/// Utilization figures for a single device and month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationStats {
    pub device_id: DeviceId,
    pub month: YearMonth,
    #[serde(rename = "consumedGiB")]
    pub consumed_gib: Option<f64>,
    pub total_capacity: Option<f64>,
    /// Two-decimal percentage, `None` when the ratio is undefined.
    pub utilization_percentage: Option<String>,
}

impl UtilizationStats {
    /// Combine the two lookups and derive the percentage.
    #[must_use]
    pub fn new(
        device_id: DeviceId,
        month: YearMonth,
        consumed: ConsumedUsage,
        capacity: DeviceCapacity,
    ) -> Self {
        Self {
            device_id,
            month,
            consumed_gib: consumed.consumed_gib,
            total_capacity: capacity.capacity,
            utilization_percentage: utilization_percentage(consumed.consumed_gib, capacity.capacity),
        }
    }
}

/// `consumed / capacity * 100`, formatted with two decimals.
///
/// Returns `None` when either side is missing or the ratio is not finite
/// (zero capacity, NaN input).
#[must_use]
pub fn utilization_percentage(consumed: Option<f64>, capacity: Option<f64>) -> Option<String> {
    let ratio = consumed? / capacity? * 100.0;
    ratio.is_finite().then(|| format!("{ratio:.2}"))
}

/// A switch whose capacity is reported by the switch utilization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchDevice {
    /// Key of this switch in the JSON report (e.g. `leafSwitch`).
    pub key: String,
    pub device_id: DeviceId,
    /// Human-readable label echoed in the report.
    pub name: String,
}

impl SwitchDevice {
    #[must_use]
    pub fn new(key: impl Into<String>, device_id: i64, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            device_id: DeviceId::new(device_id),
            name: name.into(),
        }
    }

    /// The fleet's standard switch table.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("leafSwitch", 5, "Leaf Switch"),
            Self::new("sanSwitch", 6, "SAN Switch"),
            Self::new("utilizationStats", 8, "Utilization Stats"),
        ]
    }
}

/// Capacity and port usage of one switch for the requested month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchUtilization {
    #[serde(skip)]
    pub key: String,
    pub device_id: DeviceId,
    pub name: String,
    pub capacity: Option<f64>,
    pub ports_used: Option<i64>,
}

impl SwitchUtilization {
    /// Attach a lookup result to its switch; a missing row yields nulls.
    #[must_use]
    pub fn new(device: &SwitchDevice, capacity: Option<DeviceCapacity>) -> Self {
        let capacity = capacity.unwrap_or_default();
        Self {
            key: device.key.clone(),
            device_id: device.device_id,
            name: device.name.clone(),
            capacity: capacity.capacity,
            ports_used: capacity.ports_used,
        }
    }
}

/// Switch utilization for a month, serialized as
/// `{ "month": ..., "<key>": {...}, ... }` in switch-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchUtilizationReport {
    pub month: YearMonth,
    pub switches: Vec<SwitchUtilization>,
}

impl Serialize for SwitchUtilizationReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.switches.len() + 1))?;
        map.serialize_entry("month", &self.month)?;
        for switch in &self.switches {
            map.serialize_entry(&switch.key, switch)?;
        }
        map.end()
    }
}

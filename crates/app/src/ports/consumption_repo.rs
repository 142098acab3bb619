//! Consumption repository port — reads over device consumption snapshots.

use std::future::Future;

use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::FleetBillError;
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;
use fleetbill_domain::utilization::{ConsumedUsage, DeviceCapacity};

/// Read-only access to monthly device consumption rows.
pub trait ConsumptionRepository {
    /// Consumed storage of a device, or `None` when there is no row.
    fn find_consumed(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<ConsumedUsage>, FleetBillError>> + Send;

    /// Capacity and ports in use of a device, or `None` when there is no row.
    fn find_capacity(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<DeviceCapacity>, FleetBillError>> + Send;
}

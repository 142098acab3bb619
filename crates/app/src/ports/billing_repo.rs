//! Billing repository port — reads over the billing summary.

use std::future::Future;

use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::FleetBillError;
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;

/// Read-only access to per-month billing rows.
pub trait BillingRepository {
    /// Sum of `total_charges` over every row of `month` and `calculation`.
    ///
    /// Returns `None` when no row matches.
    fn sum_total_charges(
        &self,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<f64>, FleetBillError>> + Send;

    /// Charges of a single device, or `None` when the device has no row.
    fn find_device_charges(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> impl Future<Output = Result<Option<f64>, FleetBillError>> + Send;
}

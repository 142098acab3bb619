//! Billing service — monthly cost use-cases.

use fleetbill_domain::billing::{DeviceCost, TotalCost};
use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::{FleetBillError, NotFoundError};
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;

use crate::ports::BillingRepository;

/// Application service for cost queries.
pub struct BillingService<R> {
    repo: R,
}

impl<R: BillingRepository> BillingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Total charges for a month.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn total_cost(
        &self,
        month: YearMonth,
        calculation: CalculationType,
    ) -> Result<TotalCost, FleetBillError> {
        tracing::debug!(%month, %calculation, "summing total charges");
        let total_cost = self.repo.sum_total_charges(month, calculation).await?;
        Ok(TotalCost { total_cost })
    }

    /// Charges of one device for a month.
    ///
    /// # Errors
    ///
    /// Returns [`FleetBillError::NotFound`] when the device has no billing
    /// row for `month`, or a storage error from the repository.
    pub async fn device_cost(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> Result<DeviceCost, FleetBillError> {
        tracing::debug!(%device_id, %month, %calculation, "looking up device charges");
        let total_cost = self
            .repo
            .find_device_charges(device_id, month, calculation)
            .await?
            .ok_or(NotFoundError::Device)?;
        Ok(DeviceCost {
            device_id,
            total_cost,
        })
    }
}

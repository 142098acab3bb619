//! Utilization service — capacity and consumption use-cases.

use futures::future::try_join_all;

use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::{FleetBillError, NotFoundError};
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;
use fleetbill_domain::utilization::{
    SwitchDevice, SwitchUtilization, SwitchUtilizationReport, UtilizationStats,
};

use crate::ports::ConsumptionRepository;

/// Application service for utilization queries.
pub struct UtilizationService<R> {
    repo: R,
    switches: Vec<SwitchDevice>,
}

impl<R: ConsumptionRepository> UtilizationService<R> {
    /// Create a new service reporting on the given switch table.
    pub fn new(repo: R, switches: Vec<SwitchDevice>) -> Self {
        Self { repo, switches }
    }

    /// Switches covered by [`Self::switch_utilization`].
    #[must_use]
    pub fn switches(&self) -> &[SwitchDevice] {
        &self.switches
    }

    /// Consumed vs. allocated capacity of one device.
    ///
    /// The capacity lookup is only issued once the consumed row is found.
    ///
    /// # Errors
    ///
    /// Returns [`FleetBillError::NotFound`] when either row is missing, or
    /// a storage error from the repository.
    pub async fn utilization_stats(
        &self,
        device_id: DeviceId,
        month: YearMonth,
        calculation: CalculationType,
    ) -> Result<UtilizationStats, FleetBillError> {
        let consumed = self
            .repo
            .find_consumed(device_id, month, calculation)
            .await?
            .ok_or(NotFoundError::ConsumedData)?;

        let capacity = self
            .repo
            .find_capacity(device_id, month, calculation)
            .await?
            .ok_or(NotFoundError::CapacityData)?;

        let stats = UtilizationStats::new(device_id, month, consumed, capacity);
        if stats.utilization_percentage.is_none() {
            tracing::warn!(
                %device_id,
                %month,
                consumed_gib = ?stats.consumed_gib,
                capacity = ?stats.total_capacity,
                "utilization percentage undefined"
            );
        }
        Ok(stats)
    }

    /// Capacity and ports in use of every configured switch.
    ///
    /// Lookups run concurrently; a switch without a row is reported with
    /// null figures.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered; no partial report is
    /// produced.
    pub async fn switch_utilization(
        &self,
        month: YearMonth,
        calculation: CalculationType,
    ) -> Result<SwitchUtilizationReport, FleetBillError> {
        tracing::debug!(%month, switches = self.switches.len(), "collecting switch utilization");
        let switches = try_join_all(self.switches.iter().map(|device| async move {
            let capacity = self
                .repo
                .find_capacity(device.device_id, month, calculation)
                .await?;
            Ok::<_, FleetBillError>(SwitchUtilization::new(device, capacity))
        }))
        .await?;

        Ok(SwitchUtilizationReport { month, switches })
    }
}

//! Shared application state for axum handlers.

use std::sync::Arc;

use fleetbill_app::ports::{BillingRepository, ConsumptionRepository};
use fleetbill_app::services::billing_service::BillingService;
use fleetbill_app::services::utilization_service::UtilizationService;
use fleetbill_domain::calculation::CalculationType;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<BR, CR> {
    /// Cost queries.
    pub billing_service: Arc<BillingService<BR>>,
    /// Utilization queries.
    pub utilization_service: Arc<UtilizationService<CR>>,
    /// Calculation type used when a request does not name one.
    pub calculation_type: CalculationType,
}

impl<BR, CR> Clone for AppState<BR, CR> {
    fn clone(&self) -> Self {
        Self {
            billing_service: Arc::clone(&self.billing_service),
            utilization_service: Arc::clone(&self.utilization_service),
            calculation_type: self.calculation_type,
        }
    }
}

impl<BR, CR> AppState<BR, CR>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        billing_service: BillingService<BR>,
        utilization_service: UtilizationService<CR>,
        calculation_type: CalculationType,
    ) -> Self {
        Self {
            billing_service: Arc::new(billing_service),
            utilization_service: Arc::new(utilization_service),
            calculation_type,
        }
    }
}

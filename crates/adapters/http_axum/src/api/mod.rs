//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod costs;
mod params;
#[allow(clippy::missing_errors_doc)]
pub mod utilization;

use axum::Router;
use axum::routing::get;

use fleetbill_app::ports::{BillingRepository, ConsumptionRepository};

use crate::state::AppState;

/// Build the `/api/billing` sub-router.
pub fn routes<BR, CR>() -> Router<AppState<BR, CR>>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    Router::new()
        // Costs
        .route("/totalCost", get(costs::total::<BR, CR>))
        .route("/totalCost/{device_id}", get(costs::device::<BR, CR>))
        // Utilization
        .route("/utilizationStats", get(utilization::device::<BR, CR>))
        .route(
            "/switchUtilizationStats",
            get(utilization::switches::<BR, CR>),
        )
}

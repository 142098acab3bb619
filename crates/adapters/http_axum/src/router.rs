//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use fleetbill_app::ports::{BillingRepository, ConsumptionRepository};

use crate::state::AppState;

/// Base path of the billing API.
pub const API_BASE: &str = "/api/billing";

/// Build the top-level axum [`Router`].
///
/// Nests the billing API under [`API_BASE`] next to a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browser dashboards on other origins can call the API.
pub fn build<BR, CR>(state: AppState<BR, CR>) -> Router
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest(API_BASE, crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

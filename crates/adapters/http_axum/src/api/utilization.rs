//! JSON REST handlers for capacity utilization.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fleetbill_app::ports::{BillingRepository, ConsumptionRepository};
use fleetbill_domain::utilization::{SwitchUtilizationReport, UtilizationStats};

use super::params;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the device utilization endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceQuery {
    pub month: Option<String>,
    pub device_id: Option<String>,
    pub calculation_type: Option<String>,
}

/// Query string of the switch utilization endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchQuery {
    pub month: Option<String>,
    pub calculation_type: Option<String>,
}

/// Possible responses from the device utilization endpoint.
pub enum DeviceResponse {
    Ok(Json<UtilizationStats>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the switch utilization endpoint.
pub enum SwitchResponse {
    Ok(Json<SwitchUtilizationReport>),
}

impl IntoResponse for SwitchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/billing/utilizationStats?month=YYYY-MM&deviceId=N`
pub async fn device<BR, CR>(
    State(state): State<AppState<BR, CR>>,
    query: Result<Query<DeviceQuery>, QueryRejection>,
) -> Result<DeviceResponse, ApiError>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let (month, device_id) =
        params::month_and_device(query.month.as_deref(), query.device_id.as_deref())?;
    let calculation =
        params::calculation_type(query.calculation_type.as_deref(), state.calculation_type)?;

    let stats = state
        .utilization_service
        .utilization_stats(device_id, month, calculation)
        .await?;
    Ok(DeviceResponse::Ok(Json(stats)))
}

/// `GET /api/billing/switchUtilizationStats?month=YYYY-MM`
pub async fn switches<BR, CR>(
    State(state): State<AppState<BR, CR>>,
    query: Result<Query<SwitchQuery>, QueryRejection>,
) -> Result<SwitchResponse, ApiError>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let month = params::month(query.month.as_deref())?;
    let calculation =
        params::calculation_type(query.calculation_type.as_deref(), state.calculation_type)?;

    let report = state
        .utilization_service
        .switch_utilization(month, calculation)
        .await?;
    Ok(SwitchResponse::Ok(Json(report)))
}

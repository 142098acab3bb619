//! JSON REST handlers for monthly costs.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fleetbill_app::ports::{BillingRepository, ConsumptionRepository};
use fleetbill_domain::billing::{DeviceCost, TotalCost};
use fleetbill_domain::id::DeviceId;

use super::params;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by both cost endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostQuery {
    pub month: Option<String>,
    pub calculation_type: Option<String>,
}

/// Possible responses from the total cost endpoint.
pub enum TotalResponse {
    Ok(Json<TotalCost>),
}

impl IntoResponse for TotalResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the device cost endpoint.
pub enum DeviceResponse {
    Ok(Json<DeviceCost>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/billing/totalCost?month=YYYY-MM`
pub async fn total<BR, CR>(
    State(state): State<AppState<BR, CR>>,
    query: Result<Query<CostQuery>, QueryRejection>,
) -> Result<TotalResponse, ApiError>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let month = params::month(query.month.as_deref())?;
    let calculation =
        params::calculation_type(query.calculation_type.as_deref(), state.calculation_type)?;

    let total = state.billing_service.total_cost(month, calculation).await?;
    Ok(TotalResponse::Ok(Json(total)))
}

/// `GET /api/billing/totalCost/:deviceId?month=YYYY-MM`
pub async fn device<BR, CR>(
    State(state): State<AppState<BR, CR>>,
    device_id: Result<Path<String>, PathRejection>,
    query: Result<Query<CostQuery>, QueryRejection>,
) -> Result<DeviceResponse, ApiError>
where
    BR: BillingRepository + Send + Sync + 'static,
    CR: ConsumptionRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let month = params::month(query.month.as_deref())?;
    let Path(device_id) = device_id?;
    let device_id: DeviceId = device_id.parse()?;
    let calculation =
        params::calculation_type(query.calculation_type.as_deref(), state.calculation_type)?;

    let cost = state
        .billing_service
        .device_cost(device_id, month, calculation)
        .await?;
    Ok(DeviceResponse::Ok(Json(cost)))
}

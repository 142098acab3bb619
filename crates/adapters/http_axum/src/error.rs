//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fleetbill_domain::error::{FleetBillError, ValidationError};

/// JSON error body returned by API endpoints.
///
/// Not-found responses carry `message`; everything else carries `error`.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ErrorBody {
    Error(String),
    Message(String),
}

/// Maps [`FleetBillError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(FleetBillError);

impl From<FleetBillError> for ApiError {
    fn from(err: FleetBillError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::Malformed(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::Malformed(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            FleetBillError::Validation(err) => {
                (StatusCode::BAD_REQUEST, ErrorBody::Error(err.to_string()))
            }
            FleetBillError::NotFound(err) => {
                (StatusCode::NOT_FOUND, ErrorBody::Message(err.to_string()))
            }
            FleetBillError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::Error(err.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

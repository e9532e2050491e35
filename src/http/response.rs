//! Response bodies and the error-to-status mapping.
//!
//! Every failure of the add-and-get-day handler ends here as an [`ApiError`],
//! which renders `{"error": "<message>"}` with exactly one status per variant.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::downstream::DownstreamError;

/// Successful add-and-get-day response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAndGetDayResponse {
    pub input_sum: f64,
    pub day_of_the_week: String,
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Why the client input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Missing 'num1' or 'num2' parameter")]
    MissingParameter,
    #[error("Invalid number format for 'num1' or 'num2'")]
    InvalidFormat,
    #[error("Sum of 'num1' and 'num2' is out of range")]
    SumOutOfRange,
}

/// Handler failure taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(InvalidInput),

    #[error("Downstream day service timed out")]
    DownstreamTimeout,

    #[error("Could not connect to downstream day service")]
    DownstreamUnavailable,

    #[error("Failed to get day from downstream day service: {0}")]
    DownstreamError(String),

    #[error("Failed to get day from downstream day service - missing 'day' field")]
    DownstreamContractViolation,

    #[error("An internal server error occurred")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DownstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::DownstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::DownstreamError(_) => StatusCode::BAD_GATEWAY,
            ApiError::DownstreamContractViolation | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Metric and log label.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::DownstreamTimeout => "downstream_timeout",
            ApiError::DownstreamUnavailable => "downstream_unavailable",
            ApiError::DownstreamError(_) => "downstream_error",
            ApiError::DownstreamContractViolation => "downstream_contract_violation",
            ApiError::Internal => "internal_error",
        }
    }
}

impl From<DownstreamError> for ApiError {
    fn from(err: DownstreamError) -> Self {
        match err {
            DownstreamError::Timeout(_) => ApiError::DownstreamTimeout,
            DownstreamError::Unavailable(_) => ApiError::DownstreamUnavailable,
            DownstreamError::Status { detail, .. } => ApiError::DownstreamError(detail),
            DownstreamError::InvalidBody { body } => ApiError::DownstreamError(body),
            DownstreamError::Transport(detail) => ApiError::DownstreamError(detail),
            DownstreamError::MissingDay => ApiError::DownstreamContractViolation,
            DownstreamError::Request(_) | DownstreamError::Setup(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

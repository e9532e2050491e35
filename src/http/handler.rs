//! Route handlers.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::http::request::SumRequest;
use crate::http::response::{AddAndGetDayResponse, ApiError};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /api/add-and-get-day?num1=<float>&num2=<float>`
pub async fn add_and_get_day(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<AddAndGetDayResponse>, ApiError> {
    let start_time = Instant::now();
    let result = resolve(&state, query.as_deref()).await;

    match &result {
        Ok(response) => {
            tracing::info!(
                sum = response.input_sum,
                day = %response.day_of_the_week,
                "Day received from day service"
            );
            metrics::record_request("ok", StatusCode::OK.as_u16(), start_time);
        }
        Err(err @ ApiError::Validation(_)) => {
            tracing::warn!(outcome = err.outcome(), error = %err, "Rejected request");
            metrics::record_request(err.outcome(), err.status_code().as_u16(), start_time);
        }
        Err(err) => {
            tracing::error!(
                outcome = err.outcome(),
                status = err.status_code().as_u16(),
                error = %err,
                "Day lookup failed"
            );
            metrics::record_request(err.outcome(), err.status_code().as_u16(), start_time);
        }
    }

    result.map(Json)
}

async fn resolve(state: &AppState, query: Option<&str>) -> Result<AddAndGetDayResponse, ApiError> {
    let request = SumRequest::from_query(query)?;
    let sum = request.sum()?;
    tracing::info!(num1 = request.num1, num2 = request.num2, sum, "Calculated sum");

    let day = state.days.lookup(sum).await?;

    Ok(AddAndGetDayResponse {
        input_sum: sum,
        day_of_the_week: day,
    })
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

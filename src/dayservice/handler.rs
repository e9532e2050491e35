//! `GET /api/get-day?number=<float>`

use axum::{
    extract::RawQuery,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::dayservice::calculator::calculate_day_of_week;
use crate::http::request::{first_query_value, parse_number};
use crate::http::ErrorBody;

/// Successful lookup body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DayLookupResponse {
    pub input_number: f64,
    pub day: String,
}

/// Router of the reference day service.
pub fn router() -> Router {
    Router::new()
        .route("/api/get-day", get(get_day))
        .layer(TraceLayer::new_for_http())
}

pub async fn get_day(RawQuery(query): RawQuery) -> Response {
    let raw = match first_query_value(query.as_deref(), "number") {
        Some(raw) => raw,
        None => {
            tracing::warn!("Missing 'number' query parameter");
            return bad_request("Missing 'number' query parameter");
        }
    };

    let number = match parse_number(&raw) {
        Some(n) => n,
        None => {
            tracing::warn!(number = %raw, "Invalid number format for 'number' parameter");
            return bad_request("Invalid number format for 'number' parameter");
        }
    };

    let day = calculate_day_of_week(number);
    tracing::info!(number, day, "Calculated day name");

    (
        StatusCode::OK,
        Json(DayLookupResponse {
            input_number: number,
            day: day.to_string(),
        }),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

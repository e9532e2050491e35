//! Day service HTTP client with deadline and failure classification.
//!
//! # Responsibilities
//! - Build the lookup URL for a computed sum
//! - Issue exactly one GET per lookup, bounded by the configured deadline
//! - Classify timeouts, refused connections, HTTP errors and bad bodies
//!
//! There are no retries: one attempt, then classify and return.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::timeout;
use url::Url;

use crate::config::DownstreamConfig;
use crate::downstream::types::{DownstreamError, DownstreamResult};
use crate::observability::metrics;

/// Client for the downstream day-of-week service.
#[derive(Debug, Clone)]
pub struct DayClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl DayClient {
    /// Create a client from configuration.
    pub fn new(config: &DownstreamConfig) -> DownstreamResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DownstreamError::Setup(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        let timeout = Duration::from_millis(config.timeout_ms);

        let client = Client::builder()
            .connect_timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| DownstreamError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Look up the day name for `number`.
    pub async fn lookup(&self, number: f64) -> DownstreamResult<String> {
        let url = self.lookup_url(number);
        let start_time = Instant::now();

        tracing::debug!(url = %url, "Calling day service");

        let result = match timeout(self.timeout, self.fetch(url)).await {
            Ok(Ok((status, body))) => interpret(status, &body),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(DownstreamError::Timeout(self.timeout)),
        };

        if let Err(e) = &result {
            tracing::warn!(base_url = %self.base_url, number, error = %e, "Day service call failed");
        }
        metrics::record_downstream(outcome_label(&result), start_time);
        result
    }

    /// `base_url` with `number=<value>` appended to any existing query.
    pub fn lookup_url(&self, number: f64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("number", &number.to_string());
        url
    }

    async fn fetch(&self, url: Url) -> DownstreamResult<(StatusCode, String)> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok((status, body))
    }

    fn classify(&self, err: reqwest::Error) -> DownstreamError {
        if err.is_timeout() {
            DownstreamError::Timeout(self.timeout)
        } else if err.is_connect() {
            DownstreamError::Unavailable(err.to_string())
        } else if err.is_builder() {
            DownstreamError::Request(err.to_string())
        } else {
            DownstreamError::Transport(err.to_string())
        }
    }
}

/// Turn a completed exchange into a day name or a classified error.
pub fn interpret(status: StatusCode, body: &str) -> DownstreamResult<String> {
    if !status.is_success() {
        return Err(DownstreamError::Status {
            status,
            detail: error_detail(status, body),
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|_| DownstreamError::InvalidBody {
        body: body.to_string(),
    })?;

    extract_day(&value).ok_or(DownstreamError::MissingDay)
}

/// Non-empty string `day`; anything else (absent, null, empty, non-string) is missing.
fn extract_day(value: &Value) -> Option<String> {
    value
        .get("day")
        .and_then(Value::as_str)
        .filter(|day| !day.is_empty())
        .map(str::to_string)
}

fn error_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => format!("HTTP {}", status),
            Some(other) => other.to_string(),
        },
        _ => body.to_string(),
    }
}

fn outcome_label(result: &DownstreamResult<String>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(DownstreamError::Timeout(_)) => "timeout",
        Err(DownstreamError::Unavailable(_)) => "unavailable",
        Err(DownstreamError::Status { .. }) | Err(DownstreamError::InvalidBody { .. }) => "error",
        Err(DownstreamError::MissingDay) => "contract_violation",
        Err(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> DayClient {
        DayClient::new(&DownstreamConfig {
            base_url: base_url.to_string(),
            timeout_ms: 250,
        })
        .unwrap()
    }

    #[test]
    fn test_lookup_url_appends_number() {
        let c = client("http://localhost:7001/api/get-day");
        assert_eq!(c.lookup_url(5.0).as_str(), "http://localhost:7001/api/get-day?number=5");
        assert_eq!(c.lookup_url(-2.5).as_str(), "http://localhost:7001/api/get-day?number=-2.5");
    }

    #[test]
    fn test_lookup_url_keeps_existing_query() {
        let c = client("http://days.internal/lookup?tz=utc");
        assert_eq!(c.lookup_url(1.5).as_str(), "http://days.internal/lookup?tz=utc&number=1.5");
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let err = DayClient::new(&DownstreamConfig {
            base_url: "::not a url".into(),
            timeout_ms: 100,
        })
        .unwrap_err();
        assert!(matches!(err, DownstreamError::Setup(_)));
    }

    #[test]
    fn test_interpret_success() {
        let day = interpret(StatusCode::OK, r#"{"input_number": 5.0, "day": "Tuesday"}"#).unwrap();
        assert_eq!(day, "Tuesday");
    }

    #[test]
    fn test_interpret_missing_or_empty_day() {
        for body in [r#"{}"#, r#"{"day": ""}"#, r#"{"day": null}"#, r#"{"day": 3}"#, r#"[1, 2]"#] {
            let err = interpret(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, DownstreamError::MissingDay), "body {body} gave {err:?}");
        }
    }

    #[test]
    fn test_interpret_invalid_json_on_success() {
        let err = interpret(StatusCode::OK, "<html>oops</html>").unwrap_err();
        match err {
            DownstreamError::InvalidBody { body } => assert_eq!(body, "<html>oops</html>"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_status_uses_json_error_field() {
        let err = interpret(StatusCode::BAD_REQUEST, r#"{"error": "Invalid number format"}"#).unwrap_err();
        match err {
            DownstreamError::Status { status, detail } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(detail, "Invalid number format");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_status_falls_back_to_raw_text() {
        let err = interpret(StatusCode::NOT_FOUND, "Not Found").unwrap_err();
        match err {
            DownstreamError::Status { detail, .. } => assert_eq!(detail, "Not Found"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_status_json_without_error_field() {
        let err = interpret(StatusCode::NOT_FOUND, r#"{"message": "gone"}"#).unwrap_err();
        match err {
            DownstreamError::Status { detail, .. } => assert_eq!(detail, "HTTP 404 Not Found"),
            other => panic!("unexpected {other:?}"),
        }
    }
}

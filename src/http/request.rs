//! Request parsing and request ID plumbing.
//!
//! # Responsibilities
//! - Extract `num1`/`num2` from the raw query string
//! - Parse them as finite `f64` values
//! - Attach an `x-request-id` to every request and echo it on the response
//!
//! Repeated keys resolve to their first occurrence. Surrounding whitespace
//! is ignored.

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::http::response::{ApiError, InvalidInput};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that generates a UUID v4 `x-request-id` when the client sent none.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer that copies the request's `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Value of the first `key` pair in a raw query string.
pub fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Parse a finite number, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validated operands of an add-and-get-day request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumRequest {
    pub num1: f64,
    pub num2: f64,
}

impl SumRequest {
    /// Extract and validate both operands from a raw query string.
    ///
    /// Presence of both parameters is checked before either is parsed.
    pub fn from_query(query: Option<&str>) -> Result<Self, ApiError> {
        let (raw1, raw2) = match (
            first_query_value(query, "num1"),
            first_query_value(query, "num2"),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ApiError::Validation(InvalidInput::MissingParameter)),
        };

        match (parse_number(&raw1), parse_number(&raw2)) {
            (Some(num1), Some(num2)) => Ok(Self { num1, num2 }),
            _ => Err(ApiError::Validation(InvalidInput::InvalidFormat)),
        }
    }

    /// `num1 + num2`; an overflow to infinity is rejected.
    pub fn sum(&self) -> Result<f64, ApiError> {
        let sum = self.num1 + self.num2;
        if sum.is_finite() {
            Ok(sum)
        } else {
            Err(ApiError::Validation(InvalidInput::SumOutOfRange))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation(result: Result<SumRequest, ApiError>) -> InvalidInput {
        match result {
            Err(ApiError::Validation(kind)) => kind,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_both_operands() {
        let req = SumRequest::from_query(Some("num1=2.5&num2=-1")).unwrap();
        assert_eq!(req, SumRequest { num1: 2.5, num2: -1.0 });
        assert_eq!(req.sum().unwrap(), 1.5);
    }

    #[test]
    fn test_sum_is_plain_float_addition() {
        let req = SumRequest::from_query(Some("num1=0.1&num2=0.2")).unwrap();
        assert_eq!(req.sum().unwrap(), 0.1 + 0.2);
    }

    #[test]
    fn test_missing_parameters() {
        assert_eq!(validation(SumRequest::from_query(None)), InvalidInput::MissingParameter);
        assert_eq!(
            validation(SumRequest::from_query(Some("num1=1"))),
            InvalidInput::MissingParameter
        );
        assert_eq!(
            validation(SumRequest::from_query(Some("num2=1"))),
            InvalidInput::MissingParameter
        );
    }

    #[test]
    fn test_missing_wins_over_invalid() {
        assert_eq!(
            validation(SumRequest::from_query(Some("num1=abc"))),
            InvalidInput::MissingParameter
        );
    }

    #[test]
    fn test_invalid_format() {
        let queries = [
            "num1=abc&num2=1",
            "num1=1&num2=",
            "num1=nan&num2=1",
            "num1=1&num2=inf",
            "num1=1_0&num2=1",
        ];
        for query in queries {
            assert_eq!(
                validation(SumRequest::from_query(Some(query))),
                InvalidInput::InvalidFormat,
                "{query}"
            );
        }
    }

    #[test]
    fn test_whitespace_and_encoding() {
        let req = SumRequest::from_query(Some("num1=%201e2%20&num2=+3")).unwrap();
        assert_eq!(req.num1, 100.0);
        assert_eq!(req.num2, 3.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let req = SumRequest::from_query(Some("num1=1&num1=x&num2=2")).unwrap();
        assert_eq!(req.num1, 1.0);
    }

    #[test]
    fn test_overflowing_sum_rejected() {
        let req = SumRequest::from_query(Some("num1=1e308&num2=1e308")).unwrap();
        assert!(matches!(
            req.sum(),
            Err(ApiError::Validation(InvalidInput::SumOutOfRange))
        ));
    }
}

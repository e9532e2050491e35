//! Downstream contract types and error definitions.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the day service.
#[derive(Debug, Error)]
pub enum DownstreamError {
    /// The whole exchange did not finish before the deadline.
    #[error("downstream timed out after {0:?}")]
    Timeout(Duration),

    /// No connection could be established.
    #[error("could not connect to downstream: {0}")]
    Unavailable(String),

    /// Non-2xx status. `detail` is the downstream `error` field or raw body.
    #[error("downstream returned HTTP {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    /// 2xx status but the body is not JSON.
    #[error("downstream returned a non-JSON body: {body}")]
    InvalidBody { body: String },

    /// 2xx JSON without a usable `day` value.
    #[error("downstream response has no 'day' value")]
    MissingDay,

    /// Transport failure after the connection was established.
    #[error("downstream request failed: {0}")]
    Transport(String),

    /// The request could not be built locally.
    #[error("could not build downstream request: {0}")]
    Request(String),

    /// Client construction failed (bad URL, TLS backend).
    #[error("downstream client setup failed: {0}")]
    Setup(String),
}

/// Result type for downstream operations.
pub type DownstreamResult<T> = Result<T, DownstreamError>;

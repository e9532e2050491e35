//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Validation is a pure
//! function that reports every problem, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': expected host:port")]
    InvalidSocketAddr { field: &'static str, value: String },

    #[error("invalid downstream.base_url '{value}': {reason}")]
    InvalidDownstreamUrl { value: String, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("timeouts.request_secs ({request_ms} ms) is shorter than downstream.timeout_ms ({downstream_ms} ms)")]
    RequestTimeoutTooShort { request_ms: u64, downstream_ms: u64 },
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidSocketAddr {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if let Err(reason) = check_downstream_url(&config.downstream.base_url) {
        errors.push(ValidationError::InvalidDownstreamUrl {
            value: config.downstream.base_url.clone(),
            reason,
        });
    }

    if config.downstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "downstream.timeout_ms" });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    } else {
        let request_ms = config.timeouts.request_secs.saturating_mul(1_000);
        if request_ms < config.downstream.timeout_ms {
            errors.push(ValidationError::RequestTimeoutTooShort {
                request_ms,
                downstream_ms: config.downstream.timeout_ms,
            });
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidSocketAddr {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_downstream_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

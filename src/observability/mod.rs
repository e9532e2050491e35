//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, downstream client, tower-http TraceLayer
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (counters, histograms, optional Prometheus endpoint)
//! ```
//!
//! The `x-request-id` of each request is recorded on its span, so every log
//! line emitted while handling it carries the ID.

pub mod logging;
pub mod metrics;

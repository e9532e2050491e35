//! Downstream day service integration.
//!
//! # Data Flow
//! ```text
//! handler computes sum
//!     → client.rs (GET <base_url>?number=<sum>, one attempt, deadline)
//!     → client::interpret (status + body → day name or DownstreamError)
//!     → http::response::ApiError (status code mapping)
//! ```

pub mod client;
pub mod types;

pub use client::DayClient;
pub use types::{DownstreamError, DownstreamResult};

//! Sum-and-lookup gateway library.
//!
//! Adds two numbers from the query string, asks the downstream day service
//! which day of the week the sum maps to, and reports both as JSON.

pub mod config;
pub mod dayservice;
pub mod downstream;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use downstream::DayClient;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

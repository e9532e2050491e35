//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, num1/num2 extraction and parsing)
//!     → handler.rs (sum, downstream lookup)
//!     → response.rs (success body or ApiError → status + JSON)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{SumRequest, X_REQUEST_ID};
pub use response::{AddAndGetDayResponse, ApiError, ErrorBody, InvalidInput};
pub use server::{AppState, HttpServer};

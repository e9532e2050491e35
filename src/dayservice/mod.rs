//! Reference implementation of the downstream day service.
//!
//! Serves the lookup contract the gateway depends on, so the pair can be
//! run and tested end to end without an external service.

pub mod calculator;
pub mod handler;

pub use calculator::{calculate_day_of_week, DAYS_OF_WEEK};
pub use handler::{router, DayLookupResponse};

//! Number → day-of-week mapping.
//!
//! The number is truncated to an `i32`, divided by seven with integer
//! division, and the quotient taken modulo seven indexes the week starting
//! on Sunday.

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day name for `number`.
///
/// Truncation saturates at the `i32` bounds and maps NaN to zero.
pub fn calculate_day_of_week(number: f64) -> &'static str {
    let truncated = number as i32;
    let weeks = truncated / 7;
    DAYS_OF_WEEK[weeks.rem_euclid(7) as usize]
}

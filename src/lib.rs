mod calendar;
mod clock;
mod collections;
mod config;
mod consts;
mod contact;
mod numeric;
mod prelude;
mod random;
mod reference;
mod request;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    format_date, format_time, is_in_future, is_in_past, is_weekday, weekdays_between, weekdays_since,
    weekdays_until,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use collections::{array_key_rename, is_multidimensional, subset_by_prefix};
pub use config::{HelperConfig, Helpers};
pub use consts::*;
pub use contact::{format_phone, strip_non_numeric};
pub use numeric::{
    decimal_to_percent, dollars_to_cents, get_fraction, inches_to_yards, is_decimal, is_even, is_odd,
    min_precision, parse_numeric, percent_to_decimal, strip_trailing_zeros, yards_to_inches,
};
pub use random::{chance, random_password};
pub use reference::{ExpMonth, US_STATES, UsState, exp_months, exp_years, us_states};
pub use request::{RequestContext, api_prefix, pretty};
pub use types::Month;

use chrono::NaiveDateTime;

/// Errors raised by the helpers.
///
/// Every variant describes an argument the caller should have rejected
/// before the call; none of them is transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HelperError {
    /// Weekdays were requested since a date that has not happened yet.
    #[error("The start date cannot be in the future. {0} given.")]
    StartInFuture(NaiveDateTime),

    /// Weekdays were requested until a date that has already passed.
    #[error("The end date cannot be in the past. {0} given.")]
    EndInPast(NaiveDateTime),

    /// A numeric-only helper received something that does not parse as a number.
    #[error("Expected a numeric value, got {0:?}")]
    NotNumeric(String),

    /// The key to rename is not present in the map.
    #[error("Key {0:?} not found")]
    MissingKey(String),

    /// A date or time string matched none of the accepted layouts.
    #[error("Unrecognized date or time: {0:?}")]
    UnparseableDate(String),

    /// A format string contains a specifier chrono cannot render.
    #[error("Invalid format string: {0:?}")]
    InvalidFormat(String),

    /// A month number outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// A configuration document that does not deserialize.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A probability outside `0.0..=1.0`.
    #[error("Invalid probability: {0} (must be 0-1)")]
    InvalidProbability(f64),
}

/// Result alias used throughout the crate.
pub type Result<T, E = HelperError> = std::result::Result<T, E>;

//! Configurable defaults and the bundled helper collection.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Clock, DEFAULT_API_VERSION, DEFAULT_DATE_FORMAT, DEFAULT_EXP_YEARS_AHEAD, DEFAULT_PASSWORD_LENGTH,
    DEFAULT_TIME_FORMAT, HelperError, Result, SystemClock, calendar, random, reference, request,
};

/// Application-level defaults for the helpers that take a format or a size.
///
/// Every field is optional when deserializing; missing ones keep their
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// strftime format used by `Helpers::format_date`
    pub date_format:     String,
    /// strftime format used by `Helpers::format_time`
    pub time_format:     String,
    /// Version segment used by `Helpers::api_prefix`
    pub api_version:     String,
    pub password_length: usize,
    /// Years after the current one offered by `Helpers::exp_years`
    pub exp_years_ahead: u16,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            date_format:     DEFAULT_DATE_FORMAT.to_owned(),
            time_format:     DEFAULT_TIME_FORMAT.to_owned(),
            api_version:     DEFAULT_API_VERSION.to_owned(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            exp_years_ahead: DEFAULT_EXP_YEARS_AHEAD,
        }
    }
}

impl HelperConfig {
    /// Reads a configuration from JSON.
    ///
    /// # Errors
    /// Returns `HelperError::InvalidConfig` if the document is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| HelperError::InvalidConfig(e.to_string()))?;
        debug!(?config, "loaded helper config");
        Ok(config)
    }
}

/// The helper collection bound to a configuration and a clock.
///
/// Construct one at startup and share it; it holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct Helpers<C = SystemClock> {
    config: HelperConfig,
    clock:  C,
}

impl Helpers<SystemClock> {
    pub fn new(config: HelperConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Helpers<C> {
    pub const fn with_clock(config: HelperConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub const fn config(&self) -> &HelperConfig {
        &self.config
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// See [`weekdays_since`](crate::weekdays_since).
    ///
    /// # Errors
    /// Returns `HelperError::StartInFuture` if `start` is after now.
    pub fn weekdays_since(&self, start: NaiveDateTime) -> Result<u32> {
        calendar::weekdays_since(start, &self.clock)
    }

    /// See [`weekdays_until`](crate::weekdays_until).
    ///
    /// # Errors
    /// Returns `HelperError::EndInPast` if `end` is before now.
    pub fn weekdays_until(&self, end: NaiveDateTime) -> Result<u32> {
        calendar::weekdays_until(end, &self.clock)
    }

    pub fn is_in_future(&self, date: NaiveDateTime) -> bool {
        calendar::is_in_future(date, &self.clock)
    }

    pub fn is_in_past(&self, date: NaiveDateTime) -> bool {
        calendar::is_in_past(date, &self.clock)
    }

    /// Formats `input` with the configured date format.
    ///
    /// # Errors
    /// See [`format_date`](crate::format_date).
    pub fn format_date(&self, input: &str) -> Result<String> {
        calendar::format_date(input, &self.config.date_format)
    }

    /// Formats `input` with the configured time format.
    ///
    /// # Errors
    /// See [`format_time`](crate::format_time).
    pub fn format_time(&self, input: &str) -> Result<String> {
        calendar::format_time(input, &self.config.time_format)
    }

    pub fn exp_years(&self) -> Vec<i32> {
        reference::exp_years(self.config.exp_years_ahead, &self.clock)
    }

    pub fn api_prefix(&self) -> String {
        request::api_prefix(&self.config.api_version)
    }

    pub fn random_password<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        random::random_password(self.config.password_length, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{clock_at, midnight};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_config() {
        let config = HelperConfig::default();
        assert_eq!(config.date_format, "%m/%d/%Y");
        assert_eq!(config.time_format, "%I:%M %p");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.password_length, 8);
        assert_eq!(config.exp_years_ahead, 10);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = HelperConfig::from_json(r#"{"api_version": "v2", "password_length": 12}"#).unwrap();
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.password_length, 12);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_config_from_json_empty() {
        assert_eq!(HelperConfig::from_json("{}").unwrap(), HelperConfig::default());
    }

    #[test]
    fn test_config_from_json_invalid() {
        let result = HelperConfig::from_json(r#"{"password_length": "long"}"#);
        assert!(matches!(result, Err(HelperError::InvalidConfig(_))));

        let result = HelperConfig::from_json("not json");
        assert!(matches!(result, Err(HelperError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = HelperConfig {
            date_format: "%Y-%m-%d".to_owned(),
            ..HelperConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(HelperConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_helpers_use_config_and_clock() {
        let config = HelperConfig {
            date_format: "%Y/%m/%d".to_owned(),
            time_format: "%H:%M".to_owned(),
            api_version: "v3".to_owned(),
            password_length: 20,
            exp_years_ahead: 2,
        };
        let helpers = Helpers::with_clock(config, clock_at(2024, 1, 6, 0, 0));

        assert_eq!(helpers.weekdays_since(midnight(2024, 1, 1)), Ok(5));
        assert!(helpers.weekdays_until(midnight(2024, 1, 1)).is_err());
        assert!(helpers.is_in_future(midnight(2024, 1, 7)));
        assert!(helpers.is_in_past(midnight(2024, 1, 6)));
        assert_eq!(helpers.format_date("03/05/2024").unwrap(), "2024/03/05");
        assert_eq!(helpers.format_time("5:45 PM").unwrap(), "17:45");
        assert_eq!(helpers.exp_years(), vec![2024, 2025, 2026]);
        assert_eq!(helpers.api_prefix(), "/api/v3");

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(helpers.random_password(&mut rng).len(), 20);
    }

    #[test]
    fn test_helpers_with_system_clock() {
        let helpers = Helpers::new(HelperConfig::default());
        assert_eq!(helpers.api_prefix(), "/api/v1");
        assert_eq!(helpers.exp_years().len(), 11);
        assert!(helpers.is_in_past(midnight(2000, 1, 1)));
    }
}

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the [`Clinic`]
//! registry. Nothing in the core reads environment variables itself; the binaries hand the raw
//! values to the helpers in this module.
//!
//! [`Clinic`]: crate::Clinic

use crate::constants::DATE_FORMAT;
use crate::{ClinicError, ClinicResult};
use chrono::NaiveDate;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    today_override: Option<NaiveDate>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// When `today_override` is set, it replaces the local calendar date everywhere the core
    /// needs "today" (ages, medical history entries).
    pub fn new(today_override: Option<NaiveDate>) -> Self {
        Self { today_override }
    }

    pub fn today_override(&self) -> Option<NaiveDate> {
        self.today_override
    }

    /// The reference date for age and history calculations.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> ClinicResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| ClinicError::InvalidDate {
        value: trimmed.to_string(),
        source,
    })
}

/// Parse the "today" override from an optional string value.
///
/// If `value` is `None` or empty/whitespace, there is no override.
pub fn today_from_env_value(value: Option<String>) -> ClinicResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value.map(|v| parse_date(&v)).transpose()
}

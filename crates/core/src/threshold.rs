//! Alert threshold defaults and form validation.
//!
//! Thresholds are an append-only history: every update inserts a new row and
//! the most recently inserted one is the current setting.

use serde::Deserialize;

use crate::error::{CoreError, FieldError};

/// Temperature alert bound served when no threshold has ever been stored.
pub const DEFAULT_TEMP_THRESHOLD: f64 = 32.0;

/// Humidity alert bound served when no threshold has ever been stored.
pub const DEFAULT_HUM_THRESHOLD: f64 = 90.0;

/// Raw `application/x-www-form-urlencoded` body of a threshold update.
///
/// Fields are kept as strings so missing and malformed values can be told
/// apart and reported per field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdForm {
    pub temp_threshold: Option<String>,
    pub hum_threshold: Option<String>,
}

/// A validated threshold pair ready to be stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdInput {
    pub temp_threshold: f64,
    pub hum_threshold: f64,
}

impl ThresholdForm {
    /// Validate both fields, collecting every failure before returning.
    ///
    /// Any finite number is accepted, including zero and negatives.
    pub fn validate(&self) -> Result<ThresholdInput, CoreError> {
        let temp = parse_field("temp_threshold", self.temp_threshold.as_deref());
        let hum = parse_field("hum_threshold", self.hum_threshold.as_deref());

        match (temp, hum) {
            (Ok(temp_threshold), Ok(hum_threshold)) => Ok(ThresholdInput {
                temp_threshold,
                hum_threshold,
            }),
            (temp, hum) => Err(CoreError::Validation(
                [temp.err(), hum.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

fn parse_field(field: &'static str, raw: Option<&str>) -> Result<f64, FieldError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::new(field, "must be a number")),
    }
}

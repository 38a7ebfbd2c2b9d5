//! Alert threshold rows from `threshold_table`.

use dht_core::threshold::{DEFAULT_HUM_THRESHOLD, DEFAULT_TEMP_THRESHOLD};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The current alert bounds, as served to the dashboard.
///
/// `updated_at` only drives ordering and is not part of the payload.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Threshold {
    pub temp_threshold: f64,
    pub hum_threshold: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            temp_threshold: DEFAULT_TEMP_THRESHOLD,
            hum_threshold: DEFAULT_HUM_THRESHOLD,
        }
    }
}

//! Sensor reading rows from `dhthttp_train_table`.

use dht_core::reading::format_reading_date;
use dht_core::types::{DbId, Timestamp};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `dhthttp_train_table` table.
///
/// `date` is nullable in storage and serialised as `""` when absent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub temp: f64,
    pub hum: f64,
    pub relay_status: i32,
    #[serde(serialize_with = "serialize_reading_date")]
    pub date: Option<Timestamp>,
}

fn serialize_reading_date<S: Serializer>(
    date: &Option<Timestamp>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_reading_date(*date))
}

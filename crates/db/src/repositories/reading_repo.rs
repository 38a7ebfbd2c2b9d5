//! Repository for the `dhthttp_train_table` table.

use sqlx::PgPool;

use crate::models::reading::Reading;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, temp, hum, relay_status, date";

/// Read-only access to sensor readings. Rows are written by the ingestion
/// process, never by this service.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Fetch the `limit` most recent readings, returned oldest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Reading>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM dhthttp_train_table ORDER BY id DESC LIMIT $1");
        let mut readings = sqlx::query_as::<_, Reading>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        readings.reverse();
        Ok(readings)
    }
}

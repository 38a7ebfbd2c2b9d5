//! Repository for the `threshold_table` table.

use dht_core::threshold::ThresholdInput;
use sqlx::PgPool;

use crate::models::threshold::Threshold;

/// Append-only access to the threshold history.
pub struct ThresholdRepo;

impl ThresholdRepo {
    /// Most recently stored threshold, or `None` if the table is empty.
    ///
    /// Rows sharing an `updated_at` are ordered by `id` so the later insert wins.
    pub async fn find_latest(pool: &PgPool) -> Result<Option<Threshold>, sqlx::Error> {
        sqlx::query_as::<_, Threshold>(
            "SELECT temp_threshold, hum_threshold FROM threshold_table \
             ORDER BY updated_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    /// Current threshold, falling back to the built-in defaults.
    pub async fn current(pool: &PgPool) -> Result<Threshold, sqlx::Error> {
        match Self::find_latest(pool).await? {
            Some(threshold) => Ok(threshold),
            None => {
                tracing::debug!("No stored threshold, serving defaults");
                Ok(Threshold::default())
            }
        }
    }

    /// Append a new threshold row. `updated_at` comes from the column default.
    pub async fn insert(pool: &PgPool, input: &ThresholdInput) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO threshold_table (temp_threshold, hum_threshold) VALUES ($1, $2)")
            .bind(input.temp_threshold)
            .bind(input.hum_threshold)
            .execute(pool)
            .await?;
        Ok(())
    }
}

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info, instrument};

use crate::db::{ColdstartEntry, DbError, FEED_TYPE_POST};

#[derive(Clone)]
pub struct ColdstartRepository {
    pool: PgPool,
}

impl ColdstartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete every row from feed_coldstart in a single transaction.
    ///
    /// Returns the driver-reported number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<u64, DbError> {
        debug!("Beginning transaction to clear feed_coldstart");
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM feed_coldstart")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected();
        info!("Deleted {} coldstart entries", deleted);
        Ok(deleted)
    }

    /// Insert one entry inside the caller's transaction, skipping silently
    /// if the feed_id already exists.
    ///
    /// Returns rows affected: 1 for a new entry, 0 for a conflict-skip.
    #[instrument(skip(self, tx), fields(feed_id = %feed_id, position = position))]
    pub async fn insert_ignore_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        feed_id: &str,
        position: i32,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO feed_coldstart (feed_id, feed_type, position)
            VALUES ($1, $2, $3)
            ON CONFLICT (feed_id) DO NOTHING
            "#,
        )
        .bind(feed_id)
        .bind(FEED_TYPE_POST)
        .bind(position)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }

    /// Fetch the whole coldstart list, lowest position first.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<ColdstartEntry>, DbError> {
        debug!("Querying coldstart entries ordered by position");

        let entries = sqlx::query_as::<_, ColdstartEntry>(
            r#"
            SELECT
                feed_coldstart.feed_id,
                feed_coldstart.feed_type,
                feed_coldstart.position
            FROM
                feed_coldstart
            ORDER BY
                feed_coldstart.position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} coldstart entries", entries.len());
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feed_coldstart")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }
}

use std::path::Path;

use sqlx::PgPool;
use tracing::{debug, info, instrument};

use crate::db::{ColdstartRepository, DbError};
use crate::importers::ColdstartCsvReader;

/// Error types for coldstart load operations
#[derive(Debug, thiserror::Error)]
pub enum ColdstartImportError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl From<sqlx::Error> for ColdstartImportError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(DbError::from(err))
    }
}

/// Service for seeding and clearing the feed_coldstart table.
#[derive(Clone)]
pub struct ColdstartService {
    pool: PgPool,
    repo: ColdstartRepository,
}

impl ColdstartService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: ColdstartRepository::new(pool.clone()),
            pool,
        }
    }

    /// Load the coldstart CSV into feed_coldstart in one transaction.
    ///
    /// Rows whose feed_id already exists are skipped by the conflict clause
    /// and still count toward the returned total, which is the number of
    /// attempted inserts rather than net new rows. Any failure mid-stream
    /// rolls the whole transaction back; the table is never left partially
    /// loaded.
    #[instrument(skip(self))]
    pub async fn load_from_csv(&self, path: &Path) -> Result<u64, ColdstartImportError> {
        // Transaction first: a connection failure means the file is never read.
        let mut tx = self.pool.begin().await?;

        debug!("Streaming coldstart records from {}", path.display());
        let reader = ColdstartCsvReader::open(path)?;

        let mut processed = 0u64;
        let mut inserted = 0u64;

        for record in reader {
            let record = record?;
            inserted += self
                .repo
                .insert_ignore_tx(&mut tx, &record.feed_id, record.position)
                .await?;
            processed += 1;
        }

        tx.commit().await?;

        info!(
            "Processed {} coldstart rows, {} inserted, {} duplicates skipped",
            processed,
            inserted,
            processed - inserted
        );
        Ok(processed)
    }

    /// Remove every coldstart entry, returning the count removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<u64, DbError> {
        self.repo.delete_all().await
    }
}

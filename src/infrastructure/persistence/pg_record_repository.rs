//! PostgreSQL implementation of the record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str =
    "id, url, source, medium, campaign, term, content, timestamp, short_url";

/// PostgreSQL repository for link record storage and retrieval.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn insert(&self, record: NewLinkRecord) -> Result<LinkRecord, AppError> {
        let sql = format!(
            "INSERT INTO utm_records (id, url, source, medium, campaign, term, content, timestamp) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {RECORD_COLUMNS}"
        );

        let inserted = sqlx::query_as::<_, LinkRecord>(&sql)
            .bind(record.id)
            .bind(&record.url)
            .bind(&record.source)
            .bind(&record.medium)
            .bind(&record.campaign)
            .bind(&record.term)
            .bind(&record.content)
            .bind(record.timestamp)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(inserted)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<LinkRecord>, AppError> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM utm_records WHERE url = $1 \
             ORDER BY timestamp DESC LIMIT 1"
        );

        let record = sqlx::query_as::<_, LinkRecord>(&sql)
            .bind(url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, AppError> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM utm_records ORDER BY timestamp DESC");

        let records = sqlx::query_as::<_, LinkRecord>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(records)
    }

    async fn update_short_url(&self, id: Uuid, short_url: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE utm_records SET short_url = $2 WHERE id = $1")
            .bind(id)
            .bind(short_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM utm_records WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

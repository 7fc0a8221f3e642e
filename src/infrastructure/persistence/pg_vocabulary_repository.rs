//! PostgreSQL implementation of the vocabulary repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{DimensionKind, NewVocabularyEntry, VocabularyEntry};
use crate::domain::repositories::VocabularyRepository;
use crate::error::AppError;

/// PostgreSQL repository for custom vocabulary entries.
pub struct PgVocabularyRepository {
    pool: Arc<PgPool>,
}

impl PgVocabularyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Raw row shape; `kind` is stored as text and parsed on the way out.
#[derive(sqlx::FromRow)]
struct VocabularyRow {
    id: Uuid,
    kind: String,
    value: String,
    favorite: bool,
    created_at: DateTime<Utc>,
}

impl VocabularyRow {
    fn into_entry(self) -> Result<VocabularyEntry, AppError> {
        let kind = DimensionKind::parse(&self.kind).ok_or_else(|| {
            AppError::internal(
                "Unknown vocabulary kind in store",
                json!({ "kind": self.kind }),
            )
        })?;

        Ok(VocabularyEntry {
            id: self.id,
            kind,
            value: self.value,
            favorite: self.favorite,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl VocabularyRepository for PgVocabularyRepository {
    async fn insert(&self, entry: NewVocabularyEntry) -> Result<VocabularyEntry, AppError> {
        let row = sqlx::query_as::<_, VocabularyRow>(
            "INSERT INTO vocabulary_entries (id, kind, value) VALUES ($1, $2, $3) \
             RETURNING id, kind, value, favorite, created_at",
        )
        .bind(entry.id)
        .bind(entry.kind.as_str())
        .bind(&entry.value)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_entry()
    }

    async fn list(&self, kind: Option<DimensionKind>) -> Result<Vec<VocabularyEntry>, AppError> {
        let rows = sqlx::query_as::<_, VocabularyRow>(
            "SELECT id, kind, value, favorite, created_at FROM vocabulary_entries \
             WHERE ($1::text IS NULL OR kind = $1) \
             ORDER BY created_at, id",
        )
        .bind(kind.map(|k| k.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(VocabularyRow::into_entry).collect()
    }

    async fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
    ) -> Result<Option<VocabularyEntry>, AppError> {
        let row = sqlx::query_as::<_, VocabularyRow>(
            "UPDATE vocabulary_entries SET favorite = $2 WHERE id = $1 \
             RETURNING id, kind, value, favorite, created_at",
        )
        .bind(id)
        .bind(favorite)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(VocabularyRow::into_entry).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vocabulary_entries WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

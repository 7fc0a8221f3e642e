//! In-memory repository implementations.
//!
//! Trivial test doubles backing the same traits as the PostgreSQL
//! repositories. Used by integration tests and local experimentation; they
//! hold everything in a `tokio::sync::RwLock` and implement the same
//! ordering and conflict semantics as the real store.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{
    DimensionKind, LinkRecord, NewLinkRecord, NewVocabularyEntry, VocabularyEntry,
};
use crate::domain::repositories::{RecordRepository, VocabularyRepository};
use crate::error::AppError;

/// In-memory record store.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<Vec<LinkRecord>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert(&self, record: NewLinkRecord) -> Result<LinkRecord, AppError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id == record.id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "id": record.id }),
            ));
        }

        let stored = record.into_record();
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<LinkRecord>, AppError> {
        let records = self.records.read().await;
        let mut matching: Vec<&LinkRecord> = records.iter().filter(|r| r.url == url).collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matching.first().map(|r| (*r).clone()))
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, AppError> {
        let records = self.records.read().await;
        let mut all: Vec<LinkRecord> = records.clone();
        // Same order as the SQL store: timestamp descending, stable.
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    async fn update_short_url(&self, id: Uuid, short_url: &str) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.short_url = Some(short_url.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}

/// In-memory vocabulary store.
#[derive(Default)]
pub struct InMemoryVocabularyRepository {
    entries: RwLock<Vec<VocabularyEntry>>,
}

impl InMemoryVocabularyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryVocabularyRepository {
    async fn insert(&self, entry: NewVocabularyEntry) -> Result<VocabularyEntry, AppError> {
        let mut entries = self.entries.write().await;

        if entries
            .iter()
            .any(|e| e.kind == entry.kind && e.value == entry.value)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "kind": entry.kind.as_str(), "value": entry.value }),
            ));
        }

        let stored = VocabularyEntry {
            id: entry.id,
            kind: entry.kind,
            value: entry.value,
            favorite: false,
            created_at: chrono::Utc::now(),
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, kind: Option<DimensionKind>) -> Result<Vec<VocabularyEntry>, AppError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| kind.is_none_or(|k| e.kind == k))
            .cloned()
            .collect())
    }

    async fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
    ) -> Result<Option<VocabularyEntry>, AppError> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.favorite = favorite;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }
}

//! Link history service: composition, projection, deletion, and export.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::composer::{UtmParams, compose};
use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::domain::projection::{ProjectionPage, ProjectionQuery, project};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// Input for saving a new link record.
///
/// The caller supplies the raw form fields; the service runs the composer
/// exactly once so the stored `url` and the dimension fields can never drift
/// apart.
#[derive(Debug, Clone)]
pub struct SaveRecordInput {
    /// Caller-assigned identifier; generated when absent.
    pub id: Option<Uuid>,
    pub base_url: String,
    pub params: UtmParams,
    /// Creation instant; defaults to now.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Service for creating, listing, deleting, and exporting link records.
pub struct HistoryService {
    records: Arc<dyn RecordRepository>,
}

impl HistoryService {
    /// Creates a new history service.
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    /// Composes the tagged URL and appends the record in one step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the base URL is unparseable or a
    /// required dimension is empty. Returns [`AppError::Conflict`] if the
    /// caller-assigned id already exists.
    pub async fn save(&self, input: SaveRecordInput) -> Result<LinkRecord, AppError> {
        let url = compose(&input.base_url, &input.params)
            .map_err(|e| {
                AppError::bad_request("Invalid base URL", json!({ "reason": e.to_string() }))
            })?
            .ok_or_else(|| {
                AppError::bad_request(
                    "Source and medium are required",
                    json!({ "required": ["source", "medium"] }),
                )
            })?;

        let params = input.params;
        let new_record = NewLinkRecord {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            url,
            source: owned_non_empty(&params.source),
            medium: owned_non_empty(&params.medium),
            campaign: owned_non_empty(&params.campaign),
            term: owned_non_empty(&params.term),
            content: owned_non_empty(&params.content),
            timestamp: input.timestamp.unwrap_or_else(Utc::now),
        };

        self.records.insert(new_record).await
    }

    /// Projects the full history into the visible page.
    pub async fn list(&self, query: &ProjectionQuery) -> Result<ProjectionPage, AppError> {
        let records = self.records.list_all().await?;
        Ok(project(&records, query))
    }

    /// Deletes a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.records.delete_by_id(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Link record not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Serializes the visible result set as CSV, one row per record.
    ///
    /// A pure read-only transformation of the same projection the list
    /// endpoint returns; no network dependency beyond the store read.
    pub async fn export_csv(&self, query: &ProjectionQuery) -> Result<String, AppError> {
        let page = self.list(query).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &page.records {
            writer
                .serialize(CsvRecordRow::from(record))
                .map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::internal("Failed to flush CSV", json!({ "reason": e.to_string() })))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::internal("Invalid CSV encoding", json!({ "reason": e.to_string() })))
    }
}

/// CSV row shape; one column per record field.
#[derive(Debug, Serialize)]
struct CsvRecordRow<'a> {
    id: Uuid,
    url: &'a str,
    source: Option<&'a str>,
    medium: Option<&'a str>,
    campaign: Option<&'a str>,
    term: Option<&'a str>,
    content: Option<&'a str>,
    timestamp: String,
    short_url: Option<&'a str>,
}

impl<'a> From<&'a LinkRecord> for CsvRecordRow<'a> {
    fn from(record: &'a LinkRecord) -> Self {
        Self {
            id: record.id,
            url: &record.url,
            source: record.source.as_deref(),
            medium: record.medium.as_deref(),
            campaign: record.campaign.as_deref(),
            term: record.term.as_deref(),
            content: record.content.as_deref(),
            timestamp: record.timestamp.to_rfc3339(),
            short_url: record.short_url.as_deref(),
        }
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::internal("Failed to write CSV row", json!({ "reason": e.to_string() }))
}

fn owned_non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! DTOs for composition and history endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;
use validator::Validate;

use crate::domain::composer::UtmParams;
use crate::domain::entities::LinkRecord;
use crate::domain::projection::{ProjectionPage, ProjectionQuery, SortDirection, SortKey};

/// Request to compose a tagged URL without saving it.
#[derive(Debug, Deserialize, Validate)]
pub struct ComposeRequest {
    #[validate(length(min = 1, message = "Base URL must not be empty"))]
    pub base_url: String,

    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub content: String,
}

impl ComposeRequest {
    pub fn utm_params(&self) -> UtmParams {
        UtmParams {
            source: self.source.clone(),
            medium: self.medium.clone(),
            campaign: self.campaign.clone(),
            term: self.term.clone(),
            content: self.content.clone(),
        }
    }
}

/// Composition preview result.
///
/// `ready` is false (with a null `url`) while a required dimension is still
/// empty; that state is not an error.
#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub ready: bool,
    pub url: Option<String>,
}

/// Request to save a composed link to the history.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecordRequest {
    /// Caller-assigned identifier; generated when absent.
    pub id: Option<Uuid>,

    #[validate(length(min = 1, message = "Base URL must not be empty"))]
    pub base_url: String,

    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub content: String,

    /// Creation instant; defaults to the server clock.
    pub timestamp: Option<DateTime<Utc>>,
}

impl CreateRecordRequest {
    pub fn utm_params(&self) -> UtmParams {
        UtmParams {
            source: self.source.clone(),
            medium: self.medium.clone(),
            campaign: self.campaign.clone(),
            term: self.term.clone(),
            content: self.content.clone(),
        }
    }
}

/// Filter, sort, and window query parameters for the history endpoints.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub sort: Option<SortKey>,

    #[serde(default)]
    pub direction: Option<SortDirection>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl HistoryQuery {
    /// Validates the parameters and converts to a projection query.
    ///
    /// # Defaults
    ///
    /// - `sort`: `timestamp`
    /// - `direction`: `desc`
    /// - `limit`: `default_visible` (the initial window for listing, the full
    ///   set for export)
    ///
    /// # Validation
    ///
    /// `limit` must be greater than 0.
    pub fn to_projection(&self, default_visible: usize) -> Result<ProjectionQuery, String> {
        let visible = match self.limit {
            Some(0) => return Err("Limit must be greater than 0".to_string()),
            Some(limit) => limit as usize,
            None => default_visible,
        };

        Ok(ProjectionQuery {
            text: self.search.clone().unwrap_or_default(),
            sort_key: self.sort.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
            visible,
        })
    }
}

/// JSON representation of a stored link record.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub id: Uuid,
    pub url: String,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub short_url: Option<String>,
}

impl From<LinkRecord> for RecordResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            source: record.source,
            medium: record.medium,
            campaign: record.campaign,
            term: record.term,
            content: record.content,
            timestamp: record.timestamp,
            short_url: record.short_url,
        }
    }
}

/// Response for the history listing endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<RecordResponse>,
    pub has_more: bool,
    pub total: usize,
}

impl From<ProjectionPage> for HistoryResponse {
    fn from(page: ProjectionPage) -> Self {
        Self {
            records: page.records.into_iter().map(RecordResponse::from).collect(),
            has_more: page.has_more,
            total: page.total,
        }
    }
}

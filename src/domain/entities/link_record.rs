//! Link record entity representing one generated tracking link.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A generated tracking link with its dimension values.
///
/// `url` and the dimension fields are produced by a single composition step
/// at creation time and never edited independently afterwards: `url` is
/// authoritative for display, the dimension fields for filtering. The only
/// mutation a saved record ever sees is `short_url` being attached once after
/// a successful shortening call.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LinkRecord {
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

impl LinkRecord {
    /// Returns true once a shortlink alias has been attached.
    pub fn is_shortened(&self) -> bool {
        self.short_url.is_some()
    }
}

/// Input data for creating a new link record.
///
/// Carries a fully composed URL; the service layer builds this from the raw
/// request via the composer so that `url` and the dimension fields can never
/// drift apart.
#[derive(Debug, Clone)]
pub struct NewLinkRecord {
    pub id: Uuid,
    pub url: String,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl NewLinkRecord {
    /// Converts into the stored record shape (no alias yet).
    pub fn into_record(self) -> LinkRecord {
        LinkRecord {
            id: self.id,
            url: self.url,
            source: self.source,
            medium: self.medium,
            campaign: self.campaign,
            term: self.term,
            content: self.content,
            timestamp: self.timestamp,
            short_url: None,
        }
    }
}

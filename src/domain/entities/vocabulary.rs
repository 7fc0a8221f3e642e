//! Dimension vocabulary: the source and medium values offered to users.
//!
//! The vocabulary is partitioned into a fixed built-in set and a
//! user-extensible custom set. Custom entries persist independently of any
//! link record; removing one never retroactively alters records that already
//! reference its value.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Built-in `source` values.
pub const DEFAULT_SOURCES: &[&str] = &[
    "google",
    "twitter",
    "linkedin",
    "instagram",
    "youtube",
    "signature",
    "newsletter",
    "referral",
    "direct",
    "affiliate",
    "display",
    "partner",
    "webinar",
    "outreach",
    "drip",
];

/// Built-in `medium` values.
pub const DEFAULT_MEDIUMS: &[&str] = &[
    "social",
    "paid_social",
    "email",
    "paid_ad",
    "banner",
    "video",
    "referral",
    "organic",
    "print",
    "t-shirt",
    "podcast",
    "influencer",
    "signature",
    "event",
];

/// Which tracking dimension a vocabulary entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    Source,
    Medium,
}

impl DimensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::Source => "source",
            DimensionKind::Medium => "medium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "source" => Some(DimensionKind::Source),
            "medium" => Some(DimensionKind::Medium),
            _ => None,
        }
    }

    /// Built-in values for this dimension.
    pub fn builtin_values(&self) -> &'static [&'static str] {
        match self {
            DimensionKind::Source => DEFAULT_SOURCES,
            DimensionKind::Medium => DEFAULT_MEDIUMS,
        }
    }
}

/// A custom vocabulary entry created by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub id: Uuid,
    pub kind: DimensionKind,
    pub value: String,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a custom vocabulary entry.
#[derive(Debug, Clone)]
pub struct NewVocabularyEntry {
    pub id: Uuid,
    pub kind: DimensionKind,
    pub value: String,
}

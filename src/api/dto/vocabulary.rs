//! DTOs for vocabulary endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::services::VocabularyItem;
use crate::domain::entities::{DimensionKind, VocabularyEntry};

/// Query parameters for the vocabulary listing.
#[derive(Debug, Default, Deserialize)]
pub struct VocabularyQuery {
    #[serde(default)]
    pub kind: Option<DimensionKind>,
}

/// Request to add a custom vocabulary value.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVocabularyRequest {
    pub kind: DimensionKind,

    #[validate(length(min = 1, max = 64))]
    pub value: String,
}

/// Request to set or clear the favorite flag.
#[derive(Debug, Deserialize)]
pub struct UpdateVocabularyRequest {
    pub favorite: bool,
}

/// JSON representation of one vocabulary entry, built-in or custom.
#[derive(Debug, Serialize)]
pub struct VocabularyItemResponse {
    /// Absent for built-in values; they cannot be removed or favorited.
    pub id: Option<Uuid>,
    pub kind: DimensionKind,
    pub value: String,
    pub favorite: bool,
    pub builtin: bool,
}

impl From<VocabularyItem> for VocabularyItemResponse {
    fn from(item: VocabularyItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            value: item.value,
            favorite: item.favorite,
            builtin: item.builtin,
        }
    }
}

impl From<VocabularyEntry> for VocabularyItemResponse {
    fn from(entry: VocabularyEntry) -> Self {
        Self {
            id: Some(entry.id),
            kind: entry.kind,
            value: entry.value,
            favorite: entry.favorite,
            builtin: false,
        }
    }
}

/// Response for the vocabulary listing endpoint.
#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub entries: Vec<VocabularyItemResponse>,
}

//! Dimension vocabulary service: built-in and custom source/medium values.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{DimensionKind, NewVocabularyEntry, VocabularyEntry};
use crate::domain::repositories::VocabularyRepository;
use crate::error::AppError;

/// Allowed shape for custom vocabulary values.
static VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9 _.-]*$").unwrap());

const MAX_VALUE_LENGTH: usize = 64;

/// One entry in the merged vocabulary listing.
///
/// Built-in values carry no identifier and can be neither removed nor
/// favorited; custom entries are backed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyItem {
    pub id: Option<Uuid>,
    pub kind: DimensionKind,
    pub value: String,
    pub favorite: bool,
    pub builtin: bool,
}

impl VocabularyItem {
    fn builtin(kind: DimensionKind, value: &str) -> Self {
        Self {
            id: None,
            kind,
            value: value.to_string(),
            favorite: false,
            builtin: true,
        }
    }
}

/// Service for managing the source/medium vocabulary offered to users.
pub struct VocabularyService {
    vocabulary: Arc<dyn VocabularyRepository>,
}

impl VocabularyService {
    /// Creates a new vocabulary service.
    pub fn new(vocabulary: Arc<dyn VocabularyRepository>) -> Self {
        Self { vocabulary }
    }

    /// Lists the merged vocabulary: the fixed built-in set followed by the
    /// user's custom entries in creation order.
    pub async fn list(
        &self,
        kind: Option<DimensionKind>,
    ) -> Result<Vec<VocabularyItem>, AppError> {
        let kinds: &[DimensionKind] = match kind {
            Some(DimensionKind::Source) => &[DimensionKind::Source],
            Some(DimensionKind::Medium) => &[DimensionKind::Medium],
            None => &[DimensionKind::Source, DimensionKind::Medium],
        };

        let mut items = Vec::new();
        for k in kinds {
            items.extend(
                k.builtin_values()
                    .iter()
                    .map(|value| VocabularyItem::builtin(*k, value)),
            );
        }

        let custom = self.vocabulary.list(kind).await?;
        items.extend(custom.into_iter().map(|entry| VocabularyItem {
            id: Some(entry.id),
            kind: entry.kind,
            value: entry.value,
            favorite: entry.favorite,
            builtin: false,
        }));

        Ok(items)
    }

    /// Adds a custom vocabulary value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty, overlong, or malformed
    /// value. Returns [`AppError::Conflict`] when the value collides with a
    /// built-in or an existing custom entry of the same kind.
    pub async fn add(
        &self,
        kind: DimensionKind,
        value: &str,
    ) -> Result<VocabularyEntry, AppError> {
        let value = value.trim();
        validate_value(value)?;

        if kind.builtin_values().contains(&value) {
            return Err(AppError::conflict(
                "Value is already a built-in entry",
                json!({ "kind": kind.as_str(), "value": value }),
            ));
        }

        self.vocabulary
            .insert(NewVocabularyEntry {
                id: Uuid::new_v4(),
                kind,
                value: value.to_string(),
            })
            .await
    }

    /// Sets or clears the favorite flag on a custom entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no custom entry matches `id`.
    pub async fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
    ) -> Result<VocabularyEntry, AppError> {
        self.vocabulary
            .set_favorite(id, favorite)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Vocabulary entry not found", json!({ "id": id }))
            })
    }

    /// Removes a custom entry. Records that already reference the value are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no custom entry matches `id`.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.vocabulary.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Vocabulary entry not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}

fn validate_value(value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            "Value must not be empty",
            json!({}),
        ));
    }

    if value.len() > MAX_VALUE_LENGTH {
        return Err(AppError::bad_request(
            "Value is too long",
            json!({ "max_length": MAX_VALUE_LENGTH }),
        ));
    }

    if !VALUE_REGEX.is_match(value) {
        return Err(AppError::bad_request(
            "Value contains invalid characters",
            json!({ "value": value }),
        ));
    }

    Ok(())
}

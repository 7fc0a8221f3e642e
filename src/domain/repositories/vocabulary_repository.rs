//! Repository trait for custom vocabulary entries.

use crate::domain::entities::{DimensionKind, NewVocabularyEntry, VocabularyEntry};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for user-created source/medium values.
///
/// Built-in values never pass through this repository; only custom entries
/// are persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Creates a custom entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `(kind, value)` already exists.
    /// Returns [`AppError::Upstream`] on store errors.
    async fn insert(&self, entry: NewVocabularyEntry) -> Result<VocabularyEntry, AppError>;

    /// Lists custom entries, optionally filtered by dimension kind,
    /// ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn list(&self, kind: Option<DimensionKind>) -> Result<Vec<VocabularyEntry>, AppError>;

    /// Sets or clears the favorite flag on a custom entry.
    ///
    /// Returns the updated entry, or `Ok(None)` if no entry matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn set_favorite(
        &self,
        id: Uuid,
        favorite: bool,
    ) -> Result<Option<VocabularyEntry>, AppError>;

    /// Removes a custom entry by identifier.
    ///
    /// Returns `Ok(true)` if an entry was deleted, `Ok(false)` if no entry
    /// matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

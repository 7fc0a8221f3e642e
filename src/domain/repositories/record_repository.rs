//! Repository trait for link record data access.

use crate::domain::entities::{LinkRecord, NewLinkRecord};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the link record store.
///
/// Every mutation is a single atomic call whose success or failure is
/// reported synchronously; the service layer never issues partial or batched
/// writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRecordRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Appends a new link record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Upstream`] on store errors.
    async fn insert(&self, record: NewLinkRecord) -> Result<LinkRecord, AppError>;

    /// Point lookup by the fully composed long URL.
    ///
    /// Used by the shortening flow to reuse an existing alias instead of
    /// creating a second one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Lists every record, ordered by timestamp descending.
    ///
    /// The projection layer re-sorts in memory; the stored order only fixes
    /// the insertion-order tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn list_all(&self) -> Result<Vec<LinkRecord>, AppError>;

    /// Attaches a shortlink alias to an existing record.
    ///
    /// Returns `Ok(true)` if a record was updated, `Ok(false)` if no record
    /// matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn update_short_url(&self, id: Uuid, short_url: &str) -> Result<bool, AppError>;

    /// Deletes a record by identifier.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if no record
    /// matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on store errors.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}

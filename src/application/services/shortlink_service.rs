//! Shortlink creation and analytics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::gateway::{ClickSummary, ShortlinkGateway};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub short_url: String,
    /// True when the alias already existed and the gateway was not called.
    pub duplicate: bool,
}

/// Service for shortening saved links and reading their click analytics.
///
/// Shortening is idempotent from the caller's perspective: the record store
/// is consulted before the gateway, and an already-attached alias is returned
/// as a duplicate instead of minting a second one. Two overlapping requests
/// for the same URL can still both reach the gateway; the store offers no
/// compare-and-swap, so that race is accepted rather than guarded.
pub struct ShortlinkService {
    records: Arc<dyn RecordRepository>,
    gateway: Arc<dyn ShortlinkGateway>,
}

impl ShortlinkService {
    /// Creates a new shortlink service.
    pub fn new(records: Arc<dyn RecordRepository>, gateway: Arc<dyn ShortlinkGateway>) -> Self {
        Self { records, gateway }
    }

    /// Shortens a previously saved link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no saved record matches
    /// `long_url`; the caller saves the link first. Returns
    /// [`AppError::Upstream`] when the gateway fails.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        let record = self
            .records
            .find_by_url(long_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "No saved link matches this URL",
                    json!({ "url": long_url }),
                )
            })?;

        if let Some(existing) = record.short_url {
            return Ok(ShortenOutcome {
                short_url: existing,
                duplicate: true,
            });
        }

        let short_url = self.gateway.shorten(long_url).await?;

        let updated = self.records.update_short_url(record.id, &short_url).await?;
        if !updated {
            // The record vanished between lookup and update; the alias is
            // still valid, so hand it back without persisting.
            tracing::warn!(id = %record.id, "Record deleted while shortening");
        }

        Ok(ShortenOutcome {
            short_url,
            duplicate: false,
        })
    }

    /// Fetches the click summary for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the gateway fails.
    pub async fn clicks(&self, short_url: &str) -> Result<ClickSummary, AppError> {
        self.gateway.click_summary(short_url).await
    }
}

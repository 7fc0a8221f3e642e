//! Shortlink gateway interface.
//!
//! The gateway is an external collaborator: a third-party REST service that
//! maps a long URL to a short alias and reports usage analytics. The core
//! only consumes this trait; the HTTP client lives in
//! [`crate::infrastructure::gateway`].

use crate::error::AppError;
use async_trait::async_trait;

/// Click analytics for a shortened link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickSummary {
    pub total_clicks: u64,
}

/// Outbound interface to the link-shortening service.
///
/// Idempotence toward the caller (the same long URL always yielding the same
/// alias) is **not** guaranteed by the gateway itself; the service layer
/// enforces it by consulting the record store before calling
/// [`ShortlinkGateway::shorten`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkGateway: Send + Sync {
    /// Requests a short alias for `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the gateway request fails or
    /// returns non-success, carrying the upstream message when present.
    async fn shorten(&self, long_url: &str) -> Result<String, AppError>;

    /// Fetches the click summary for an existing alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the gateway request fails or
    /// returns non-success.
    async fn click_summary(&self, short_url: &str) -> Result<ClickSummary, AppError>;
}

//! Deterministic gateway stand-in for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::gateway::{ClickSummary, ShortlinkGateway};
use crate::error::AppError;

/// Gateway double that hands out sequential aliases without any network I/O.
///
/// Each `shorten` call returns `{base}/{n}` with `n` counting up from 1, so a
/// test can assert both the alias shape and how many times the gateway was
/// actually consulted.
pub struct FixedShortlinkGateway {
    base: String,
    clicks: u64,
    counter: AtomicU64,
}

impl FixedShortlinkGateway {
    pub fn new(base: impl Into<String>, clicks: u64) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            clicks,
            counter: AtomicU64::new(0),
        }
    }

    /// Number of `shorten` calls that reached this gateway.
    pub fn shorten_calls(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShortlinkGateway for FixedShortlinkGateway {
    async fn shorten(&self, _long_url: &str) -> Result<String, AppError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{}/{}", self.base, n))
    }

    async fn click_summary(&self, _short_url: &str) -> Result<ClickSummary, AppError> {
        Ok(ClickSummary {
            total_clicks: self.clicks,
        })
    }
}

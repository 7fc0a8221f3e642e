//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{HistoryService, ShortlinkService, VocabularyService};

/// Shared application state.
///
/// Holds the service layer behind `Arc`s; cloning is cheap and every handler
/// receives its own clone via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub history_service: Arc<HistoryService>,
    pub shortlink_service: Arc<ShortlinkService>,
    pub vocabulary_service: Arc<VocabularyService>,
}

impl AppState {
    /// Creates application state from the assembled services.
    pub fn new(
        history_service: Arc<HistoryService>,
        shortlink_service: Arc<ShortlinkService>,
        vocabulary_service: Arc<VocabularyService>,
    ) -> Self {
        Self {
            history_service,
            shortlink_service,
            vocabulary_service,
        }
    }
}

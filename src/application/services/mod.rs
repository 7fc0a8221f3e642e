//! Business logic services for the application layer.

pub mod history_service;
pub mod shortlink_service;
pub mod vocabulary_service;

pub use history_service::{HistoryService, SaveRecordInput};
pub use shortlink_service::{ShortenOutcome, ShortlinkService};
pub use vocabulary_service::{VocabularyItem, VocabularyService};

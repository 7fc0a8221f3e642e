//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`LinkRecord`] - A generated tracking link and its dimension values
//! - [`VocabularyEntry`] - A custom source/medium value offered to users
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLinkRecord` and `NewVocabularyEntry` carry the fields a caller supplies,
//! the entity structs carry what the store returns.

pub mod link_record;
pub mod vocabulary;

pub use link_record::{LinkRecord, NewLinkRecord};
pub use vocabulary::{
    DEFAULT_MEDIUMS, DEFAULT_SOURCES, DimensionKind, NewVocabularyEntry, VocabularyEntry,
};

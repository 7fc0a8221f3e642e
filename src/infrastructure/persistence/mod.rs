//! Repository implementations for the record store.
//!
//! Concrete implementations of the domain repository traits: SQLx-backed
//! PostgreSQL repositories for production and in-memory doubles for tests.
//!
//! # Repositories
//!
//! - [`PgRecordRepository`] - Link record storage and retrieval
//! - [`PgVocabularyRepository`] - Custom source/medium values
//! - [`InMemoryRecordRepository`] / [`InMemoryVocabularyRepository`] - test doubles

pub mod memory;
pub mod pg_record_repository;
pub mod pg_vocabulary_repository;

pub use memory::{InMemoryRecordRepository, InMemoryVocabularyRepository};
pub use pg_record_repository::PgRecordRepository;
pub use pg_vocabulary_repository::PgVocabularyRepository;

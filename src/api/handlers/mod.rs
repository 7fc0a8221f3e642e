//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod history;
pub mod shortlink;
pub mod vocabulary;

pub use health::health_handler;
pub use history::{
    compose_handler, create_record_handler, delete_record_handler, export_history_handler,
    history_list_handler,
};
pub use shortlink::{clicks_handler, create_shortlink_handler};
pub use vocabulary::{
    create_vocabulary_handler, delete_vocabulary_handler, update_vocabulary_handler,
    vocabulary_list_handler,
};

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::json;
use utm_builder::api::handlers::health_handler;
use utm_builder::api::routes::api_routes;
use utm_builder::application::services::{HistoryService, ShortlinkService, VocabularyService};
use utm_builder::infrastructure::gateway::FixedShortlinkGateway;
use utm_builder::infrastructure::persistence::{
    InMemoryRecordRepository, InMemoryVocabularyRepository,
};
use utm_builder::state::AppState;

/// Fixed click count reported by the test gateway.
pub const GATEWAY_CLICKS: u64 = 42;

/// Builds application state over in-memory repositories and a deterministic
/// gateway double. The gateway handle is returned so tests can assert how
/// often it was actually consulted.
pub fn create_test_state() -> (AppState, Arc<FixedShortlinkGateway>) {
    let record_repository = Arc::new(InMemoryRecordRepository::new());
    let vocabulary_repository = Arc::new(InMemoryVocabularyRepository::new());
    let gateway = Arc::new(FixedShortlinkGateway::new("https://sho.rt", GATEWAY_CLICKS));

    let history_service = Arc::new(HistoryService::new(record_repository.clone()));
    let shortlink_service = Arc::new(ShortlinkService::new(record_repository, gateway.clone()));
    let vocabulary_service = Arc::new(VocabularyService::new(vocabulary_repository));

    let state = AppState::new(history_service, shortlink_service, vocabulary_service);
    (state, gateway)
}

/// Test server over the full route table (without rate limiting).
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Saves a record through the API and returns its JSON representation.
pub async fn save_record(
    server: &TestServer,
    base_url: &str,
    source: &str,
    medium: &str,
    campaign: &str,
    timestamp: &str,
) -> serde_json::Value {
    let response = server
        .post("/api/history")
        .json(&json!({
            "base_url": base_url,
            "source": source,
            "medium": medium,
            "campaign": campaign,
            "timestamp": timestamp
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()
}

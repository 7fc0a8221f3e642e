mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_requires_saved_record() {
    let (state, gateway) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shortlinks")
        .json(&json!({ "long_url": "https://nowhere.com/?utm_source=x" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
    assert_eq!(gateway.shorten_calls(), 0);
}

#[tokio::test]
async fn test_shorten_is_idempotent_toward_the_gateway() {
    let (state, gateway) = common::create_test_state();
    let server = common::test_server(state);

    let record = common::save_record(
        &server,
        "https://example.com",
        "google",
        "cpc",
        "spring",
        "2026-03-01T10:00:00Z",
    )
    .await;
    let long_url = record["url"].as_str().unwrap();

    let first = server
        .post("/api/shortlinks")
        .json(&json!({ "long_url": long_url }))
        .await;
    first.assert_status_ok();
    let first = first.json::<Value>();
    assert_eq!(first["short_url"], "https://sho.rt/1");
    assert_eq!(first["duplicate"], false);

    // The second request must reuse the stored alias, not mint a new one.
    let second = server
        .post("/api/shortlinks")
        .json(&json!({ "long_url": long_url }))
        .await;
    second.assert_status_ok();
    let second = second.json::<Value>();
    assert_eq!(second["short_url"], "https://sho.rt/1");
    assert_eq!(second["duplicate"], true);

    assert_eq!(gateway.shorten_calls(), 1);
}

#[tokio::test]
async fn test_shorten_attaches_alias_to_history() {
    let (state, _gateway) = common::create_test_state();
    let server = common::test_server(state);

    let record = common::save_record(
        &server,
        "https://example.com",
        "google",
        "cpc",
        "",
        "2026-03-01T10:00:00Z",
    )
    .await;
    let long_url = record["url"].as_str().unwrap();

    server
        .post("/api/shortlinks")
        .json(&json!({ "long_url": long_url }))
        .await
        .assert_status_ok();

    let listing = server.get("/api/history").await.json::<Value>();
    assert_eq!(listing["records"][0]["short_url"], "https://sho.rt/1");

    // The alias participates in the text filter.
    let filtered = server
        .get("/api/history")
        .add_query_param("search", "sho.rt")
        .await
        .json::<Value>();
    assert_eq!(filtered["total"], 1);
}

#[tokio::test]
async fn test_shorten_rejects_malformed_url() {
    let (state, gateway) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .post("/api/shortlinks")
        .json(&json!({ "long_url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(gateway.shorten_calls(), 0);
}

#[tokio::test]
async fn test_click_summary() {
    let (state, _gateway) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/api/shortlinks/clicks")
        .add_query_param("short_url", "https://sho.rt/1")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total_clicks"], common::GATEWAY_CLICKS);
}

mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _gateway) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

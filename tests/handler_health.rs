mod common;

#[tokio::test]
async fn test_health_check() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "Connected (memory)");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_index_page() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("shorten-form"));
}

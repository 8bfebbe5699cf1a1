mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use encurtador::api::handlers::shorten_handler;
use encurtador::domain::repositories::LinkRepository;
use encurtador::infrastructure::persistence::InMemoryLinkRepository;
use serde_json::json;
use std::sync::Arc;

fn server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_shorten_generates_short_id() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "www.teste.com/essa-url-e-longa", "shortId": null }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let short_id = json["shortId"].as_str().unwrap();
    assert_eq!(short_id.len(), 5);
    assert!(short_id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json.as_object().unwrap().len(), 1);

    let stored = repo.find_by_short_id(short_id).await.unwrap().unwrap();
    assert_eq!(stored.original_url, "www.teste.com/essa-url-e-longa");
}

#[tokio::test]
async fn test_shorten_with_custom_short_id() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "www.teste.com/essa-url-e-longa", "shortId": "teste" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "shortId": "teste" }));

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_existing_short_id_conflicts() {
    let (server, repo) = server();
    common::create_test_link(&repo, "teste", "www.first.com").await;

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "www.teste.com", "shortId": "teste" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Short ID já existe...");

    let stored = repo.find_by_short_id("teste").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "www.first.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_two_links() {
    let (server, repo) = server();

    for _ in 0..2 {
        server
            .post("/api/shorten")
            .json(&json!({ "url": "www.teste.com" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_empty_url_is_stored() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "", "shortId": "vazio" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let stored = repo.find_by_short_id("vazio").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "");
}

#[tokio::test]
async fn test_shorten_invalid_short_id_rejected() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "www.teste.com", "shortId": "has/slash" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_reserved_short_id_rejected() {
    let (server, _repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "www.teste.com", "shortId": "health" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_url_rejected() {
    let (server, _repo) = server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "shortId": "teste" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_shorten_malformed_json_rejected() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorten")
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(repo.count().await.unwrap(), 0);
}

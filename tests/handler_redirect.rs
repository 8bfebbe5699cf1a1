mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_adds_scheme_to_bare_host() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "ABCDE", "www.teste.com/essa-url-e-longa").await;

    let response = server.get("/ABCDE").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location"),
        "https://www.teste.com/essa-url-e-longa"
    );
}

#[tokio::test]
async fn test_redirect_trailing_slash() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "slash", "https://example.com").await;

    let response = server.get("/slash/").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Not found..");
}

#[tokio::test]
async fn test_redirect_unusable_stored_url_uses_error_envelope() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "ctl", "a\nb").await;

    let response = server.get("/ctl").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["details"]["shortId"], "ctl");
}

mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum_test::TestServer;
use serde::Serialize;
use shorturl::api::dto::ShortenResponse;
use shorturl::api::handlers::shorten_handler;
use shorturl::domain::repositories::LinkRepository;
use shorturl::state::AppState;
use shorturl::utils::token::url_token;

#[derive(Serialize)]
struct ShortenBody<'a> {
    url: &'a str,
}

fn shorten_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_returns_derived_token() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .form(&ShortenBody {
            url: "https://www.google.com",
        })
        .await;

    response.assert_status_ok();
    let body: ShortenResponse = response.json();
    assert_eq!(body.short_url, url_token("https://www.google.com"));
}

#[tokio::test]
async fn test_shorten_same_url_twice_returns_same_token() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let first: ShortenResponse = server
        .post("/shorten")
        .form(&ShortenBody {
            url: "https://example.com/page",
        })
        .await
        .json();
    let second: ShortenResponse = server
        .post("/shorten")
        .form(&ShortenBody {
            url: "https://example.com/page",
        })
        .await
        .json();

    assert_eq!(first.short_url, second.short_url);
}

#[tokio::test]
async fn test_shorten_stores_mapping() {
    let (state, repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .form(&ShortenBody {
            url: "https://example.com/stored",
        })
        .await;

    response.assert_status_ok();
    let body: ShortenResponse = response.json();

    let stored = repository.find_by_token(&body.short_url).await.unwrap();
    assert_eq!(stored.unwrap().long_url, "https://example.com/stored");
}

#[tokio::test]
async fn test_shorten_missing_url_field_is_bad_request() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .text("other=value")
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Missing 'url' parameter");
}

#[tokio::test]
async fn test_shorten_empty_url_value_is_bad_request() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .text("url=")
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_wrong_content_type_is_internal_error() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .text("url=https://example.com")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "internal_error");
    assert_eq!(body["error"]["message"], "Failed to parse form data");
}

#[tokio::test]
async fn test_shorten_duplicate_url_field_is_internal_error() {
    let (state, _repository) = common::create_test_state();
    let server = shorten_server(state);

    let response = server
        .post("/shorten")
        .text("url=https://a.example&url=https://b.example")
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

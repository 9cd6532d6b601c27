//! HttpLinkApi integration tests
//!
//! Each test starts an in-process axum server on 127.0.0.1:0 that answers
//! with canned bodies, then drives the real ureq client against it.

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use linkdesk::client::{FETCH_FAILED, HttpLinkApi, LinkApi, REQUEST_FAILED, SHORTEN_FAILED};
use linkdesk::config::ApiConfig;
use linkdesk::directory::LinkRecord;
use linkdesk::errors::LinkdeskError;

/// Serve `app` in the background and return a client pointed at it
async fn spawn_server(app: Router) -> HttpLinkApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
    };
    HttpLinkApi::new(&config).unwrap()
}

fn links_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/v1/links",
        get(move || async move {
            (status, [("content-type", "application/json")], body).into_response()
        }),
    )
}

// =============================================================================
// GET /v1/links
// =============================================================================

#[tokio::test]
async fn test_list_links_normalizes_destiny_url() {
    let api = spawn_server(links_router(
        StatusCode::OK,
        r#"{"links":[
            {"short_url":"http://s/r/abc","destiny_url":"https://example.com","clicks":5},
            {"short_url":"http://s/r/def","destiny_url":"https://rust-lang.org","clicks":0}
        ]}"#,
    ))
    .await;

    let records = api.list_links().await.unwrap();
    assert_eq!(
        records,
        vec![
            LinkRecord::new("http://s/r/abc", "https://example.com", 5),
            LinkRecord::new("http://s/r/def", "https://rust-lang.org", 0),
        ]
    );
}

#[tokio::test]
async fn test_list_links_null_is_empty() {
    let api = spawn_server(links_router(StatusCode::OK, r#"{"links":null}"#)).await;
    assert!(api.list_links().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_links_server_error_uses_generic_message() {
    let api = spawn_server(links_router(StatusCode::INTERNAL_SERVER_ERROR, "")).await;
    let err = api.list_links().await.unwrap_err();
    assert_eq!(err, LinkdeskError::server_error(FETCH_FAILED));
}

#[tokio::test]
async fn test_list_links_malformed_body() {
    let api = spawn_server(links_router(StatusCode::OK, "not json")).await;
    let err = api.list_links().await.unwrap_err();
    assert!(matches!(err, LinkdeskError::Serialization(_)));
}

#[tokio::test]
async fn test_list_links_unreachable_server() {
    // Bind then drop so the port is very likely closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpLinkApi::new(&ApiConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 2,
    })
    .unwrap();
    let err = api.list_links().await.unwrap_err();
    assert_eq!(err, LinkdeskError::request_failure(FETCH_FAILED));
}

// =============================================================================
// POST /v1/shortener
// =============================================================================

async fn echo_shortener(Json(body): Json<Value>) -> impl IntoResponse {
    let url = body["url"].as_str().unwrap_or_default().to_string();
    if url.is_empty() {
        return (StatusCode::BAD_REQUEST, "URL is required").into_response();
    }
    let code = url.len();
    (
        StatusCode::OK,
        Json(json!({ "short_url": format!("http://s/r/{}", code) })),
    )
        .into_response()
}

#[tokio::test]
async fn test_shorten_success() {
    let api = spawn_server(Router::new().route("/v1/shortener", post(echo_shortener))).await;
    let short = api.shorten("http://example.com").await.unwrap();
    assert_eq!(short, "http://s/r/18");
}

#[tokio::test]
async fn test_shorten_plain_text_error_is_shown() {
    let api = spawn_server(Router::new().route("/v1/shortener", post(echo_shortener))).await;
    let err = api.shorten("").await.unwrap_err();
    assert_eq!(err, LinkdeskError::server_error("URL is required"));
}

#[tokio::test]
async fn test_shorten_json_error_is_shown() {
    let app = Router::new().route(
        "/v1/shortener",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "invalid url" })),
            )
        }),
    );
    let api = spawn_server(app).await;
    let err = api.shorten("nope").await.unwrap_err();
    assert_eq!(err.message(), "invalid url");
}

#[tokio::test]
async fn test_shorten_error_without_message() {
    let app = Router::new().route(
        "/v1/shortener",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
    );
    let api = spawn_server(app).await;
    let err = api.shorten("http://example.com").await.unwrap_err();
    assert_eq!(err.message(), SHORTEN_FAILED);
}

#[tokio::test]
async fn test_shorten_unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpLinkApi::new(&ApiConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 2,
    })
    .unwrap();
    let err = api.shorten("http://example.com").await.unwrap_err();
    assert_eq!(err.message(), REQUEST_FAILED);
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let app = Router::new().nest("/api", links_router(StatusCode::OK, r#"{"links":[]}"#));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HttpLinkApi::new(&ApiConfig {
        base_url: format!("http://{}/api", addr),
        timeout_secs: 5,
    })
    .unwrap();
    assert_eq!(api.links_url().path(), "/api/v1/links");
    assert!(api.list_links().await.unwrap().is_empty());
}

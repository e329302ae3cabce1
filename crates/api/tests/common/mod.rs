#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sponsorlink_api::config::{GeminiConfig, ServerConfig, StorageBackend, StorageConfig};
use sponsorlink_api::router::build_app_router;
use sponsorlink_api::state::AppState;
use sponsorlink_db::{KeyValueStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults and no Gemini key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            dir: PathBuf::from("./data"),
            database_url: "sqlite::memory:".to_string(),
        },
        gemini: GeminiConfig::disabled(),
    }
}

/// Full application router over `store`, with the production middleware stack.
pub fn build_test_app_with(store: Arc<dyn KeyValueStore>, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Full application router over a fresh in-memory store.
///
/// Returns the store too so tests can inspect what was written.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(store.clone(), test_config());
    (app, store)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Assert a `303 See Other` and fetch the page it points to.
pub async fn follow(app: Router, response: Response) -> Response {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    get(app, &location).await
}

/// Assert a 200 HTML response and return its body.
pub async fn html(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

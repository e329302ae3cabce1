//! Tests for `AppError` → HTTP response mapping.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sponsorlink_api::error::AppError;
use sponsorlink_core::error::CoreError;
use sponsorlink_core::validation::ValidationError;
use sponsorlink_db::DbError;

async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::not_found("Event", "42")).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Event with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400_with_user_message() {
    let (status, json) = error_to_response(AppError::from(ValidationError::InvalidAmount)).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Please enter a valid sponsorship amount.");
}

#[tokio::test]
async fn corrupt_store_returns_sanitized_500() {
    let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = AppError::from(DbError::Corrupt {
        key: "College.connect_events".into(),
        source,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Conflict(
        "Event 1 is already approved".into(),
    )))
    .await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Event 1 is already approved");
}

#[tokio::test]
async fn io_failure_hides_details() {
    let err = AppError::from(DbError::from(std::io::Error::other("/secret/path")));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn service_unavailable_returns_503() {
    let (status, json) =
        error_to_response(AppError::ServiceUnavailable("GEMINI_API_KEY is not configured".into()))
            .await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn upstream_error_passes_message_through() {
    let (status, json) = error_to_response(AppError::Upstream("quota exceeded".into())).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "quota exceeded");
}

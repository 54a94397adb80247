use crate::ApiError;

use folio_cms::CmsError;
use folio_core::CoreError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn status_and_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_payload_returns_400_with_marker() {
    let error = ApiError::from(CmsError::from(CoreError::invalid_payload(
        "expected 3 ids, got 2",
    )));

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_PAYLOAD");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid reorder payload"));
    assert!(message.contains("expected 3 ids"));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "url is required".into(),
        field: Some("url".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "url");
}

#[tokio::test]
async fn test_not_owned_returns_400() {
    let error = ApiError::from(CmsError::not_owned("image belongs elsewhere"));

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "NOT_OWNED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = ApiError::from(CmsError::not_found("Project x not found"));

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project x not found");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::from(CmsError::conflict("Post slug 'intro' already exists"));

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_store_failure_returns_500_without_details() {
    let error = ApiError::from(CmsError::StoreFailure {
        message: "database is locked at /srv/folio/folio.db".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("folio.db"));
}

#[test]
fn test_unknown_child_kind_converts_to_not_found() {
    let error: ApiError = "videos".parse::<folio_core::ChildKind>().unwrap_err().into();

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_serde_error_converts_to_validation() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let error = ApiError::from(serde_error);

    assert!(matches!(error, ApiError::Validation { .. }));
}

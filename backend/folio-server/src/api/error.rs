//! REST API error types
//!
//! Every failure leaves the server as `{ "error": { code, message, field? } }`
//! with a status that tells the client whether to fix its request or retry.

use folio_cms::CmsError;
use folio_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "INVALID_PAYLOAD")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reorder list is not a permutation of the current children (400)
    #[error("Invalid reorder payload: {message} {location}")]
    InvalidPayload {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or out-of-range input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Child belongs to a different project (400)
    #[error("Not owned: {message} {location}")]
    NotOwned {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Duplicate slug or lost uniqueness race (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 500; details are logged, never returned
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload { .. }
            | ApiError::Validation { .. }
            | ApiError::NotOwned { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::InvalidPayload { message, .. } => ApiErrorBody {
                code: "INVALID_PAYLOAD".into(),
                message: format!("Invalid reorder payload: {}", message),
                field: Some("childIds".into()),
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::NotOwned { message, .. } => ApiErrorBody {
                code: "NOT_OWNED".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CmsError> for ApiError {
    #[track_caller]
    fn from(e: CmsError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CmsError::InvalidPayload { message, .. } => {
                ApiError::InvalidPayload { message, location }
            }
            CmsError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CmsError::NotOwned { message, .. } => ApiError::NotOwned { message, location },
            CmsError::NotFound { message, .. } => ApiError::NotFound { message, location },
            CmsError::Conflict { message, .. } => ApiError::Conflict { message, location },
            CmsError::StoreFailure { message, .. } => {
                // Don't expose internal database details to clients
                log::error!("Store failure: {}", message);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::from(CmsError::from(e))
    }
}

/// Malformed JSON bodies are the client's problem, not an unprocessable entity
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid request body: {}", rejection.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid request body: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

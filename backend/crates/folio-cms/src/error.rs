use folio_core::CoreError;
use folio_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmsError {
    /// Client-submitted reorder list does not match the current children.
    #[error("Invalid reorder payload: {message} {location}")]
    InvalidPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// The child exists but belongs to a different project.
    #[error("Not owned: {message} {location}")]
    NotOwned {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store failure: {message} {location}")]
    StoreFailure {
        message: String,
        location: ErrorLocation,
    },
}

impl CmsError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        CmsError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        CmsError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_owned<S: Into<String>>(message: S) -> Self {
        CmsError::NotOwned {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        CmsError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the failure is the client's to fix (refetch, correct input)
    /// rather than the server's.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CmsError::StoreFailure { .. })
    }
}

impl From<CoreError> for CmsError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            CoreError::InvalidPayload { message, .. } => {
                CmsError::InvalidPayload { message, location }
            }
            CoreError::Validation { message, field, .. } => CmsError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidChildKind { value, .. } => CmsError::NotFound {
                message: format!("Unknown collection '{}'", value),
                location,
            },
            CoreError::StoreFailure { source, .. } => CmsError::StoreFailure {
                message: source.to_string(),
                location,
            },
        }
    }
}

impl From<DbError> for CmsError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            DbError::UniqueViolation { message, .. } => CmsError::Conflict { message, location },
            DbError::StaleRow { message, .. } => CmsError::InvalidPayload { message, location },
            other => CmsError::StoreFailure {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;

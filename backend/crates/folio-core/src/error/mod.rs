use crate::StoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Reorder payload is not an exact permutation of the current children.
    #[error("Invalid reorder payload: {message} {location}")]
    InvalidPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid child kind: {value} {location}")]
    InvalidChildKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Store failure: {source} {location}")]
    StoreFailure {
        source: StoreError,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_payload<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// A stale row means the caller's view of the collection no longer matches the
/// store, which is a payload problem rather than an infrastructure one.
impl From<StoreError> for CoreError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        match source {
            StoreError::Stale { message } => CoreError::InvalidPayload {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => CoreError::StoreFailure {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

use folio_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// A scoped update matched no row, or the collection changed under a reorder.
    #[error("Stale row in {table}: {message} {location}")]
    StaleRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn invalid_row<S: Into<String>>(table: &'static str, message: S) -> Self {
        DbError::InvalidRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = source {
            if db_error.is_unique_violation() {
                return Self::UniqueViolation {
                    message: db_error.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(error: DbError) -> Self {
        match error {
            DbError::StaleRow { message, .. } => StoreError::stale(message),
            other => StoreError::backend(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

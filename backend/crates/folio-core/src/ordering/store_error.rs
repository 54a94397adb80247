use std::error::Error as StdError;

use thiserror::Error;

/// Failures reported by an [`OrderedStore`](crate::OrderedStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A scoped update matched no row: the child vanished or moved parents
    /// between validation and write.
    #[error("Stale child row: {message}")]
    Stale { message: String },

    #[error("Store backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl StoreError {
    pub fn stale<S: Into<String>>(message: S) -> Self {
        StoreError::Stale {
            message: message.into(),
        }
    }

    pub fn backend<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        StoreError::Backend {
            source: Box::new(source),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

//! Error types for map lookups.

use thiserror::Error;

/// Errors returned by the fallible map accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MapError {
    /// No entry exists for the folded form of the key.
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}

impl MapError {
    pub(crate) fn key_not_found<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }
}

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

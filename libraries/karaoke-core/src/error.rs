/// Core error types for the karaoke backend
use std::time::Duration;
use thiserror::Error;

/// Result type alias using `KaraokeError`
pub type Result<T> = std::result::Result<T, KaraokeError>;

/// Core error type for the karaoke backend
#[derive(Error, Debug)]
pub enum KaraokeError {
    /// Missing or malformed input field
    #[error("{0}")]
    Validation(String),

    /// Malformed entity identifier
    #[error("Invalid {entity} ID: {value}")]
    InvalidReference { entity: String, value: String },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// A store operation exceeded the request deadline
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl KaraokeError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid reference error
    pub fn invalid_reference(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidReference {
            entity: entity.into(),
            value: value.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for KaraokeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

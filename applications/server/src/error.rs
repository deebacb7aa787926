/// Server error types
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use karaoke_core::KaraokeError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Body or query string that couldn't be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] KaraokeError),

    /// Invalid or unreadable configuration; only raised at startup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ServerError::BadRequest("Invalid request body".to_string())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        ServerError::BadRequest("Invalid query string".to_string())
    }
}

impl ServerError {
    /// Status code and client-facing message
    ///
    /// Internal failures are logged here and reported with a generic message.
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(err) => match err {
                KaraokeError::Validation(_) | KaraokeError::InvalidReference { .. } => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                KaraokeError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
                KaraokeError::Timeout(elapsed) => {
                    tracing::error!("Store operation timed out after {:?}", elapsed);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Request timed out".to_string(),
                    )
                }
                KaraokeError::Database(ref e) => {
                    tracing::error!("Database error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
            },
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

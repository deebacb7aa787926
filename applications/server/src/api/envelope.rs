/// Success envelope shared by every endpoint
use serde::Serialize;

/// Successful response body: `{"data": ...}`
///
/// Failures use `{"error": "..."}`, produced by `ServerError`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

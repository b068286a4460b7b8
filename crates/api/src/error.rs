//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_feed::FeedError;
use serde_json::json;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    /// Blog feed could not be fetched from any candidate URL
    #[error("Failed to fetch blog posts: {error}")]
    FeedUnavailable {
        error: FeedError,
        /// Include `details` in the body (development only)
        expose_details: bool,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound => {
                let body = Json(json!({
                    "error": {
                        "code": "NOT_FOUND",
                        "message": self.to_string(),
                    }
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }

            // Feed failures keep the blog page contract: `error` + empty `posts`
            ApiError::FeedUnavailable {
                error,
                expose_details,
            } => {
                let mut body = json!({
                    "error": self.to_string(),
                    "posts": [],
                });
                if *expose_details {
                    body["details"] = json!({
                        "kind": error.kind(),
                        "message": error.to_string(),
                    });
                }
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

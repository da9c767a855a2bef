use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use snipstash_storage::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal { message: String, error: String },
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    error: None,
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message,
                    error: None,
                },
            ),
            ApiError::Internal { message, error } => {
                tracing::error!("storage fault: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message,
                        error: Some(error),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Map a storage failure to the wire taxonomy: an absent document is
    /// 404, everything else is 500 with the endpoint's fixed message.
    pub fn from_storage(message: &str, e: StorageError) -> Self {
        match e {
            StorageError::NotFound { .. } => ApiError::NotFound("File not found".to_string()),
            other => ApiError::Internal {
                message: message.to_string(),
                error: other.to_string(),
            },
        }
    }
}

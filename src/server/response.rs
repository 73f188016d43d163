use crate::errors::AppError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure of a single API operation: a generic message for the action that
/// was attempted plus the underlying error text.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub error: String,
}

impl ApiError {
    pub fn bad_request(message: &'static str, err: AppError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
            error: err.to_string(),
        }
    }

    /// Body that could not be read as JSON at all.
    pub fn rejected(message: &'static str, rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
            error: rejection.body_text(),
        }
    }

    pub fn internal(message: &'static str, err: AppError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status, error = %self.error, "{}", self.message);
        let body = Json(json!({ "message": self.message, "error": self.error }));
        (self.status, body).into_response()
    }
}

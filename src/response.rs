use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl AppError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::plain(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::plain(StatusCode::NOT_FOUND, error)
    }

    pub fn method_not_allowed(error: impl Into<String>) -> Self {
        Self::plain(StatusCode::METHOD_NOT_ALLOWED, error)
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::plain(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    /// 500 carrying a user-facing apology alongside the error label.
    pub fn internal_with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
            message: Some(message.into()),
        }
    }

    fn plain(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

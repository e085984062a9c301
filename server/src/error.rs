//! Request-level error responses.
//!
//! Every failure surfaces as a `{"detail": "..."}` body with the matching
//! status code. Storage failures are logged with their full cause but reach
//! the client as an opaque 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tinytodo_core::TodoError;

#[derive(Debug)]
pub enum ApiError {
    /// The request was well-formed JSON but fails a field-level rule.
    Validation(String),
    /// The service rejected or could not complete the operation.
    Todo(TodoError),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError::Todo(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Todo(TodoError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ApiError::Todo(err) => {
                tracing::error!("todo storage failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

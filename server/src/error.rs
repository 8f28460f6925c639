//! Request errors and their HTTP mapping.
//!
//! Every failure the API can produce is a client error: it becomes a 400
//! with an `{"error": ...}` body and never a 5xx.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use transform_core::{ErrorResponse, TransformError};

#[derive(Debug, Error)]
pub enum AppError {
    /// A required body field was absent or null.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The body was not a JSON object with string fields, or lacked the
    /// JSON content type.
    #[error("{0}")]
    InvalidBody(String),

    /// The dispatcher refused the request; its message is passed through verbatim.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

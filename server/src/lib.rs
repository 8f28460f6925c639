//! HTTP surface for the text transform service.
//!
//! # Overview
//! Two JSON routes (`GET /health`, `POST /api/transform`) in front of the
//! `transform-core` dispatcher. Every other path is served from the static
//! front-end directory.
//!
//! # Design
//! - `router` is an explicit factory: each call builds an independent
//!   `Router` from a `ServerConfig`, so tests can run isolated instances.
//! - Handlers hold no state. Validation happens here; everything after it
//!   is the dispatcher's job.

pub mod config;
pub mod error;

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};
use transform_core::{HealthResponse, TransformRequest, TransformResponse};

pub use config::{ConfigError, ServerConfig};
pub use error::AppError;

/// Router with the default configuration.
pub fn app() -> Router {
    router(&ServerConfig::default())
}

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/transform", post(transform))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener, config: &ServerConfig) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, static_dir = %config.static_dir.display(), "transform server listening");
    }
    axum::serve(listener, router(config)).await
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: timestamp(),
    })
}

/// Body rejections are taken as a `Result` so they answer with the same
/// `400 {"error": ...}` envelope as every other client error.
async fn transform(
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Json<TransformResponse>, AppError> {
    let outcome = payload
        .map_err(AppError::from)
        .and_then(|Json(input)| validate_and_transform(input));
    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "transform request rejected");
    }
    let result = outcome?;
    Ok(Json(TransformResponse {
        result,
        timestamp: timestamp(),
    }))
}

fn validate_and_transform(input: TransformRequest) -> Result<String, AppError> {
    let text = input.text.ok_or(AppError::MissingField("text"))?;
    let operation = input
        .operation
        .filter(|op| !op.is_empty())
        .ok_or(AppError::MissingField("operation"))?;
    tracing::debug!(%operation, len = text.len(), "transform request");
    Ok(transform_core::transform(&text, &operation)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_rfc3339_utc_with_millis() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'), "{ts}");
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len(), "{ts}");
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn missing_text_is_reported_first() {
        let err = validate_and_transform(TransformRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: text");
    }

    #[test]
    fn empty_operation_counts_as_missing() {
        let err = validate_and_transform(TransformRequest::new("hello", "")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: operation");
    }

    #[test]
    fn empty_text_is_accepted() {
        let out = validate_and_transform(TransformRequest::new("", "wordCount")).unwrap();
        assert_eq!(out, "0 words");
    }

    #[test]
    fn unknown_operation_is_passed_through() {
        let err = validate_and_transform(TransformRequest::new("hello", "bogus")).unwrap_err();
        assert!(matches!(err, AppError::Transform(_)));
        assert_eq!(err.to_string(), "Unknown operation: bogus");
    }
}

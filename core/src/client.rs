//! Stateless HTTP request builder and response parser for the transform API.
//!
//! # Design
//! `TransformClient` holds only a `base_url`. Each route is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the HTTP round-trip in
//! between, so this module never does I/O.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorResponse, HealthResponse, TransformRequest, TransformResponse};

/// Synchronous, stateless client for the transform API.
#[derive(Debug, Clone)]
pub struct TransformClient {
    base_url: String,
}

impl TransformClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_transform(&self, input: &TransformRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/transform", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<HealthResponse, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_transform(&self, response: HttpResponse) -> Result<TransformResponse, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
///
/// A 400 carries the server's `{"error": ...}` envelope; if the body is not
/// one, the raw body becomes the message.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => {
            let message = serde_json::from_str::<ErrorResponse>(&response.body)
                .map(|e| e.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Rejected(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

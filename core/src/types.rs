//! Wire DTOs for the transform API, shared by the server and the client.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/transform`.
///
/// Both fields are optional so that a missing field can be reported by name
/// instead of being rejected by the JSON extractor. An explicit `null` reads
/// as absent; an empty string does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

impl TransformRequest {
    pub fn new(text: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            operation: Some(operation.into()),
        }
    }
}

/// Successful transform. `timestamp` is ISO-8601 in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub result: String,
    pub timestamp: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

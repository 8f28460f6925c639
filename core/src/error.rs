//! Error types for the dispatcher and the API client.
//!
//! # Design
//! `TransformError` is the only way the dispatcher can fail; its message is
//! returned to HTTP callers verbatim, so the `Display` text is part of the
//! wire contract. `ApiError` separates a 400 rejection (the server understood
//! the request and refused it) from any other unexpected status.

use thiserror::Error;

/// Errors returned by `transform`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The operation name is not one of the recognized wire names.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Errors returned by `TransformClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 400 with the given error message.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The server returned a status other than 200 or 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

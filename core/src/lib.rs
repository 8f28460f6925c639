//! Text transformation core for the transform service.
//!
//! # Overview
//! Two independent halves live here:
//! - The dispatcher (`transform`) and its four pure string operations. The
//!   server calls it directly; nothing in it allocates beyond the output.
//! - `TransformClient`, which builds `HttpRequest` values and parses
//!   `HttpResponse` values for the service's JSON routes without touching the
//!   network (host-does-IO pattern).
//!
//! # Design
//! - Operation names are parsed into the `Operation` enum at the boundary;
//!   everything past that point is an exhaustive `match`.
//! - The wire DTOs in `types` are shared by the server and the client, so the
//!   two cannot drift apart.

pub mod client;
pub mod error;
pub mod http;
pub mod operation;
pub mod transform;
pub mod types;

pub use client::TransformClient;
pub use error::{ApiError, TransformError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operation::Operation;
pub use transform::{reverse, slugify, transform, uppercase, word_count};
pub use types::{ErrorResponse, HealthResponse, TransformRequest, TransformResponse};

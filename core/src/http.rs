//! Plain-data request and response values exchanged with the caller.
//!
//! `TransformClient` never opens a socket: it hands out `HttpRequest`s and
//! reads back `HttpResponse`s that some other transport produced.

/// HTTP method for a request. The service only exposes `GET` and `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// What to send: method, absolute URL, headers and an optional JSON body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// What came back, as reported by whichever transport executed the request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

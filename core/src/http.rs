//! Plain-data HTTP types shared by the builder/parser core and the service
//! layer.
//!
//! # Design
//! Requests and responses are described as owned plain data. `RecordClient`
//! produces `HttpRequest` values and consumes `HttpResponse` values without
//! touching the network; whoever executes the round trip (the bundled
//! `RecordService`, a test harness, or a non-Rust host behind the FFI) sits
//! between the two. Owned `String` / `Vec` fields keep the types trivially
//! movable across the FFI boundary.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `RecordClient::build_*` methods. The executor is responsible for
/// performing the round trip and handing back the matching `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after performing an `HttpRequest`, then fed to
/// `RecordClient::parse_*` for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

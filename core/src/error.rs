//! Error types for the record store client.
//!
//! # Design
//! `NotFound` and `Conflict` get dedicated variants because callers branch on
//! them: a missing record is terminal for that call, a conflict needs caller
//! intervention (re-read, merge, retry with a fresh etag). Every other
//! unexpected status lands in `Server` with the raw status code and body for
//! debugging. `Network` covers transport failures raised below the HTTP
//! status layer.

use thiserror::Error;

/// Errors returned by `RecordClient` parse methods and `RecordService`
/// operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — no record with the requested id exists.
    #[error("record not found")]
    NotFound,

    /// The server returned 409 (duplicate id on create) or 412 (stale
    /// `If-Match` etag on update).
    #[error("conflict: {body}")]
    Conflict { body: String },

    /// The server returned an unexpected non-2xx status.
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    /// The request never produced an HTTP response (DNS, connect, read).
    #[error("network failure: {0}")]
    Network(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Whether a caller-side retry can reasonably succeed without further
    /// intervention. Transport failures and server-side errors qualify;
    /// conflicts and missing records do not, nor do local JSON failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Server { .. })
    }
}

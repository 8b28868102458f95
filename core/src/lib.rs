//! Typed client for a remote record store exposing a CRUD HTTP API.
//!
//! # Overview
//! Two layers over the same wire contract:
//! - `RecordClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern), keeping the
//!   core deterministic and testable.
//! - `RecordService` wraps the client with a blocking `ureq` transport and
//!   exposes one call per CRUD operation; this is the surface an application
//!   wires up with a `ClientConfig`.
//!
//! # Design
//! - No caching, no implicit retry: every operation is a fresh round trip
//!   and errors surface as typed `ApiError` results.
//! - Optimistic concurrency rides on the record's `etag` and an optional
//!   `If-Match` precondition on update.
//! - Types use owned `String` / `Vec` fields to simplify the FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod types;

pub use client::RecordClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::RecordService;
pub use types::{CreateRecord, Record, UpdateRecord};

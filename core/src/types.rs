//! Domain DTOs for the record store API.
//!
//! # Design
//! These types mirror the remote store's document schema but are defined
//! independently of the mock-server crate; the integration suite catches
//! schema drift between the two. Owned fields keep the FFI mapping simple.
//!
//! `etag` is the server-assigned version token: assigned on create, rotated
//! on every successful update. Clients echo it back through the `If-Match`
//! header when they want an update rejected on a version mismatch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single record as stored by the remote document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub etag: String,
}

/// Request payload for creating a record.
///
/// `id` may be supplied by the client; when omitted the server assigns one.
/// A supplied id that already exists is rejected with a conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for updating an existing record. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

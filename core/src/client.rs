//! Stateless HTTP request builder and response parser for the record store
//! API.
//!
//! # Design
//! `RecordClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The executor performs the actual round trip between the
//! two, keeping this layer deterministic and free of I/O dependencies.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateRecord, Record, UpdateRecord};

/// Stateless builder/parser for the record store API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `RecordService` wraps this with a real transport;
/// hosts behind the FFI execute the round trip themselves.
#[derive(Debug, Clone)]
pub struct RecordClient {
    base_url: String,
}

impl RecordClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_records(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/records", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_record(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/records/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_record(&self, input: &CreateRecord) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/records", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Build an update request. `if_match` carries the etag of the revision
    /// the caller read; the server rejects the write with 412 when it no
    /// longer matches. `None` skips the precondition (last writer wins).
    pub fn build_update_record(
        &self,
        id: Uuid,
        input: &UpdateRecord,
        if_match: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        if let Some(etag) = if_match {
            headers.push(("if-match".to_string(), etag.to_string()));
        }
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/records/{id}", self.base_url),
            headers,
            body: Some(body),
        })
    }

    pub fn build_delete_record(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/records/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_records(&self, response: HttpResponse) -> Result<Vec<Record>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_record(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
///
/// 409 (duplicate id) and 412 (stale etag) both surface as `Conflict`; the
/// body distinguishes them when the caller cares.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        409 | 412 => Err(ApiError::Conflict {
            body: response.body.clone(),
        }),
        status => Err(ApiError::Server {
            status,
            body: response.body.clone(),
        }),
    }
}

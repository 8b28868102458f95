//! Blocking service wrapper that executes the requests `RecordClient` builds.
//!
//! # Design
//! `RecordService` pairs the stateless builder/parser with a `ureq::Agent`
//! and exposes one method per CRUD operation. The agent is configured with
//! status-as-error disabled so 4xx/5xx responses come back as data and status
//! interpretation stays in one place (`RecordClient::parse_*`); only failures
//! below the HTTP layer (DNS, connect, read) become `ApiError::Network`.
//!
//! The service holds no mutable state and is safe to share across threads;
//! every call is an independent round trip and nothing is cached. Timeouts
//! and retries are left to the caller.

use uuid::Uuid;

use crate::client::RecordClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateRecord, Record, UpdateRecord};

/// Blocking CRUD client for the record store.
pub struct RecordService {
    client: RecordClient,
    agent: ureq::Agent,
}

impl RecordService {
    /// Build a service from an explicit configuration. The configuration is
    /// consumed; the service is immutable afterwards.
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: RecordClient::new(config.base_url()),
            agent,
        }
    }

    /// Create a record; the server assigns the id unless `input` carries one.
    pub fn create(&self, input: &CreateRecord) -> Result<Record, ApiError> {
        tracing::debug!(name = %input.name, "creating record");
        let req = self.client.build_create_record(input)?;
        self.client.parse_create_record(self.execute(req)?)
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: Uuid) -> Result<Record, ApiError> {
        tracing::debug!(%id, "fetching record");
        let req = self.client.build_get_record(id);
        self.client.parse_get_record(self.execute(req)?)
    }

    /// Fetch the full collection in a single request. Order is unspecified.
    pub fn list(&self) -> Result<Vec<Record>, ApiError> {
        tracing::debug!("listing records");
        let req = self.client.build_list_records();
        self.client.parse_list_records(self.execute(req)?)
    }

    /// Apply a partial update. With `if_match` set, the write is rejected as
    /// `Conflict` when the record has changed since that etag was read.
    pub fn update(
        &self,
        id: Uuid,
        input: &UpdateRecord,
        if_match: Option<&str>,
    ) -> Result<Record, ApiError> {
        tracing::debug!(%id, precondition = if_match.is_some(), "updating record");
        let req = self.client.build_update_record(id, input, if_match)?;
        self.client.parse_update_record(self.execute(req)?)
    }

    /// Delete a record by id. Deleting an absent id is `NotFound`; retry
    /// policy is the caller's.
    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting record");
        let req = self.client.build_delete_record(id);
        self.client.parse_delete_record(self.execute(req)?)
    }

    /// Perform one round trip, translating transport failures to `Network`.
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = req;

        let result = match method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Delete => {
                let mut builder = self.agent.delete(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let mut builder = self.agent.put(&path);
                for (key, value) in &headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

//! In-memory implementation of the remote record store API.
//!
//! Stands in for the real document-store service in integration tests. The
//! wire contract matches what `docstore-core` expects: JSON bodies, etag
//! versioning, 409 on duplicate create ids, 412 on stale `If-Match`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub etag: String,
}

#[derive(Deserialize)]
pub struct CreateRecord {
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateRecord {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Record>>>;

/// Version tokens are opaque to clients; a fresh UUID per write is enough.
fn new_etag() -> String {
    Uuid::new_v4().to_string()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_records(State(db): State<Db>) -> Json<Vec<Record>> {
    let records = db.read().await;
    Json(records.values().cloned().collect())
}

async fn create_record(
    State(db): State<Db>,
    Json(input): Json<CreateRecord>,
) -> Result<(StatusCode, Json<Record>), StatusCode> {
    let mut records = db.write().await;
    let id = input.id.unwrap_or_else(Uuid::new_v4);
    if records.contains_key(&id) {
        return Err(StatusCode::CONFLICT);
    }
    let record = Record {
        id,
        name: input.name,
        description: input.description,
        etag: new_etag(),
    };
    records.insert(id, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_record(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Record>, StatusCode> {
    let records = db.read().await;
    records.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(input): Json<UpdateRecord>,
) -> Result<Json<Record>, StatusCode> {
    let mut records = db.write().await;
    let record = records.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(expected) = headers.get(header::IF_MATCH) {
        let expected = expected.to_str().map_err(|_| StatusCode::BAD_REQUEST)?;
        if expected != record.etag {
            return Err(StatusCode::PRECONDITION_FAILED);
        }
    }
    if let Some(name) = input.name {
        record.name = name;
    }
    if let Some(description) = input.description {
        record.description = description;
    }
    record.etag = new_etag();
    Ok(Json(record.clone()))
}

async fn delete_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut records = db.write().await;
    records
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

//! Common test helpers for integration tests.
//!
//! [`FakeBackend`] is a small in-memory stand-in for the REST resource
//! server: one `axum::Router` serving `api/{resource}` and
//! `api/{resource}/{id}`, recording every request it receives.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because each
//! integration test file is compiled as a separate crate and uses only
//! part of these helpers.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde_json::{Value, json};

use boost_client::{ClientConfig, EntityService, Entity, HistoryNavigator, OneshotHttpClient};

/// A request as the backend saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    records: HashMap<String, BTreeMap<i64, Value>>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
    fail_next: Option<(StatusCode, String)>,
    missing_as_404: bool,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state().next_id = 1000;
        backend
    }

    fn state(&self) -> MutexGuard<'_, BackendState> {
        self.inner.lock().unwrap()
    }

    /// Store a record under `resource` (e.g. "quotes"); it must carry an id
    pub fn insert(&self, resource: &str, record: Value) -> &Self {
        let id = record["id"].as_i64().expect("seeded record needs an id");
        self.state()
            .records
            .entry(resource.to_string())
            .or_default()
            .insert(id, record);
        self
    }

    pub fn record(&self, resource: &str, id: i64) -> Option<Value> {
        self.state().records.get(resource)?.get(&id).cloned()
    }

    /// Make the next request fail with `status` and `body`
    pub fn fail_next(&self, status: StatusCode, body: impl Into<String>) {
        self.state().fail_next = Some((status, body.into()));
    }

    /// Answer unknown ids with 404 instead of an empty 200
    pub fn missing_as_404(&self) {
        self.state().missing_as_404 = true;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request received")
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/{resource}", any(collection))
            .route("/api/{resource}/{id}", any(item))
            .with_state(self.clone())
    }

    fn record_request(&self, method: &Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
        let parsed = if body.is_empty() {
            None
        } else {
            serde_json::from_slice(body).ok()
        };
        self.state().requests.push(RecordedRequest {
            method: method.clone(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: parsed,
        });
    }

    fn take_failure(&self) -> Option<Response> {
        self.state()
            .fail_next
            .take()
            .map(|(status, body)| (status, body).into_response())
    }
}

fn alert(action: &str, resource: &str, id: i64) -> HeaderMap {
    let entity = resource.trim_end_matches('s');
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-boostclientapp-alert",
        HeaderValue::from_str(&format!("boostclientApp.{}.{}", entity, action)).unwrap(),
    );
    headers.insert("x-boostclientapp-params", HeaderValue::from(id));
    headers
}

async fn collection(
    State(backend): State<FakeBackend>,
    Path(resource): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.record_request(&method, &uri, &headers, &body);
    if let Some(failure) = backend.take_failure() {
        return failure;
    }

    match method {
        Method::GET => {
            let list: Vec<Value> = backend
                .state()
                .records
                .get(&resource)
                .map(|records| records.values().cloned().collect())
                .unwrap_or_default();
            axum::Json(list).into_response()
        }
        Method::POST => {
            let mut record: Value = serde_json::from_slice(&body).unwrap_or(json!({}));
            let id = {
                let mut state = backend.state();
                state.next_id += 1;
                let id = state.next_id;
                record["id"] = json!(id);
                state
                    .records
                    .entry(resource.clone())
                    .or_default()
                    .insert(id, record.clone());
                id
            };
            (
                StatusCode::CREATED,
                alert("created", &resource, id),
                axum::Json(record),
            )
                .into_response()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn item(
    State(backend): State<FakeBackend>,
    Path((resource, id)): Path<(String, i64)>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.record_request(&method, &uri, &headers, &body);
    if let Some(failure) = backend.take_failure() {
        return failure;
    }

    let existing = backend.record(&resource, id);
    let missing_as_404 = backend.state().missing_as_404;

    match (method, existing) {
        (Method::GET, Some(record)) => axum::Json(record).into_response(),
        (Method::GET, None) if missing_as_404 => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "title": "Not Found", "status": 404 })),
        )
            .into_response(),
        // an empty body is how the backend says "nothing here"
        (Method::GET, None) => StatusCode::OK.into_response(),
        (Method::PUT, Some(_)) => {
            let mut record: Value = serde_json::from_slice(&body).unwrap_or(json!({}));
            record["id"] = json!(id);
            backend.insert(&resource, record.clone());
            (StatusCode::OK, alert("updated", &resource, id), axum::Json(record)).into_response()
        }
        (Method::PATCH, Some(mut record)) => {
            let patch: Value = serde_json::from_slice(&body).unwrap_or(json!({}));
            if let (Some(target), Some(changes)) = (record.as_object_mut(), patch.as_object()) {
                for (key, value) in changes {
                    if value.is_null() {
                        target.remove(key);
                    } else {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
            backend.insert(&resource, record.clone());
            (StatusCode::OK, alert("updated", &resource, id), axum::Json(record)).into_response()
        }
        (Method::DELETE, _) => {
            if let Some(records) = backend.state().records.get_mut(&resource) {
                records.remove(&id);
            }
            (StatusCode::NO_CONTENT, alert("deleted", &resource, id)).into_response()
        }
        (_, None) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "title": "Entity not found",
                "status": 400,
                "message": "error.idnotfound",
                "errorKey": "idnotfound"
            })),
        )
            .into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

/// In-process client wired to `backend`
pub fn client_for(backend: &FakeBackend) -> OneshotHttpClient {
    OneshotHttpClient::new(backend.router())
}

/// Entity service of kind `E` wired to `backend`
pub fn service_for<E: Entity>(backend: &FakeBackend) -> EntityService<E, OneshotHttpClient> {
    EntityService::new(client_for(backend), &ClientConfig::default())
}

pub fn navigator() -> HistoryNavigator {
    HistoryNavigator::starting_at("/")
}

/// Two employers and one quote for employer 2
pub fn seeded_backend() -> FakeBackend {
    let backend = FakeBackend::new();
    backend
        .insert("employers", json!({ "id": 1, "name": "Acme" }))
        .insert("employers", json!({ "id": 2, "name": "Globex" }))
        .insert(
            "quotes",
            json!({
                "id": 123,
                "name": "Fleet cover",
                "quoteDate": "2023-05-01",
                "employer": { "id": 2, "name": "Globex" }
            }),
        );
    backend
}

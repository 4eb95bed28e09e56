//! In-process mock of the admin backend: auth, data, public and booking endpoints.
//!
//! Starts an axum server on a free port and exposes what it received.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use edu_center::config::Config;
use edu_center::ApiClient;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "token-42";

#[derive(Debug, Default)]
pub struct Backend {
    pub collections: HashMap<String, Vec<Value>>,
    pub next_id: i64,
    pub puts: Vec<(String, i64, Value)>,
    pub posts: Vec<(String, Value)>,
    pub bookings: Vec<Value>,
    pub reject_bookings: bool,
    /// Writes answer 200 with an empty body.
    pub bare_writes: bool,
    pub public_tokens: Vec<Option<String>>,
}

pub type Shared = Arc<Mutex<Backend>>;

impl Backend {
    pub fn seed(&mut self, entity: &str, record: Value) {
        self.collections.entry(entity.to_string()).or_default().push(record);
    }
}

#[derive(Deserialize)]
struct EntityQuery {
    entity: String,
    id: Option<i64>,
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

fn authorized(headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get("X-Auth-Token").and_then(|v| v.to_str().ok()) {
        Some(TOKEN) => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn auth(Json(creds): Json<Credentials>) -> Result<Json<Value>, StatusCode> {
    if creds.username == USERNAME && creds.password == PASSWORD {
        Ok(Json(json!({ "token": TOKEN })))
    } else if creds.username == "tokenless" {
        Ok(Json(json!({ "token": "" })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn list(
    State(backend): State<Shared>,
    Query(q): Query<EntityQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;
    let backend = backend.lock().unwrap();
    let items = backend.collections.get(&q.entity).cloned().unwrap_or_default();
    Ok(Json(Value::Array(items)))
}

async fn create(
    State(backend): State<Shared>,
    Query(q): Query<EntityQuery>,
    headers: HeaderMap,
    Json(mut record): Json<Value>,
) -> Result<Response, StatusCode> {
    authorized(&headers)?;
    let mut backend = backend.lock().unwrap();
    backend.posts.push((q.entity.clone(), record.clone()));
    backend.next_id += 1;
    let id = backend.next_id;
    record["id"] = json!(id);
    backend.seed(&q.entity, record);
    if backend.bare_writes {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(Json(json!({ "id": id, "success": true })).into_response())
}

async fn update(
    State(backend): State<Shared>,
    Query(q): Query<EntityQuery>,
    headers: HeaderMap,
    Json(record): Json<Value>,
) -> Result<Response, StatusCode> {
    authorized(&headers)?;
    let id = q.id.ok_or(StatusCode::BAD_REQUEST)?;
    let mut backend = backend.lock().unwrap();
    backend.puts.push((q.entity.clone(), id, record.clone()));
    let bare = backend.bare_writes;
    let items = backend.collections.entry(q.entity).or_default();
    let slot = items
        .iter_mut()
        .find(|item| item["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = record;
    slot["id"] = json!(id);
    if bare {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(Json(json!({ "success": true, "updated": 1 })).into_response())
}

async fn public_list(
    State(backend): State<Shared>,
    Query(q): Query<EntityQuery>,
    headers: HeaderMap,
) -> Json<Value> {
    let mut backend = backend.lock().unwrap();
    let token = headers
        .get("X-Auth-Token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    backend.public_tokens.push(token);
    let items = backend.collections.get(&q.entity).cloned().unwrap_or_default();
    Json(Value::Array(items))
}

async fn submit_booking(State(backend): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut backend = backend.lock().unwrap();
    if backend.reject_bookings {
        return Json(json!({ "success": false, "error": "Сервис временно недоступен" }));
    }
    backend.bookings.push(body);
    Json(json!({ "success": true }))
}

/// Bind to port 0 and return the base address with the shared backend state.
pub async fn start_server(backend: Backend) -> (String, Shared) {
    let shared: Shared = Arc::new(Mutex::new(backend));
    let app = Router::new()
        .route("/auth", post(auth))
        .route("/admin-api", get(list).post(create).put(update))
        .route("/public-api", get(public_list))
        .route("/submit-booking", post(submit_booking))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .with_state(shared.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), shared)
}

pub fn config_for(base: &str) -> Config {
    Config {
        auth_url: format!("{base}/auth"),
        data_url: format!("{base}/admin-api"),
        public_url: format!("{base}/public-api"),
        booking_url: format!("{base}/submit-booking"),
        ..Config::default()
    }
}

pub fn client_for(base: &str) -> ApiClient {
    ApiClient::new(&config_for(base)).unwrap()
}

/// A sqlite file under the temp dir, unique per test.
pub fn temp_db(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("edu_center_{}_{}.db", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

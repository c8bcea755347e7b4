//! Mock users API for exercising the HTTP client.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use minidash::api::User;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub cache_control: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    users: Arc<Mutex<Vec<User>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// When set, every route answers with this status.
    fail_with: Arc<Mutex<Option<u16>>>,
    /// When set, `POST /users` answers with this status and raw body.
    create_reply: Arc<Mutex<Option<(u16, String)>>>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start(users: Vec<User>) -> Self {
        let state = MockState {
            users: Arc::new(Mutex::new(users)),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
            create_reply: Arc::new(Mutex::new(None)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route("/users/{id}", get(get_user))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn fail_with(&self, status: u16) {
        *self.state.fail_with.lock().await = Some(status);
    }

    pub async fn reply_to_create(&self, status: u16, body: &str) {
        *self.state.create_reply.lock().await = Some((status, body.to_string()));
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn capture(
    state: &MockState,
    method: &str,
    path: String,
    headers: &HeaderMap,
    body: Option<Value>,
) -> Option<Response> {
    let cache_control = headers
        .get("cache-control")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.requests.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path,
        cache_control,
        body,
    });
    let status = (*state.fail_with.lock().await)?;
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Some((status, "mock failure").into_response())
}

async fn list_users(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Some(failure) = capture(&state, "GET", "/users".into(), &headers, None).await {
        return failure;
    }
    Json(state.users.lock().await.clone()).into_response()
}

async fn get_user(
    State(state): State<MockState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/users/{id}");
    if let Some(failure) = capture(&state, "GET", path, &headers, None).await {
        return failure;
    }
    let users = state.users.lock().await;
    match users.iter().find(|user| user.id == id) {
        Some(user) => Json(user.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response(),
    }
}

async fn create_user(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let echo = body.clone();
    if let Some(failure) = capture(&state, "POST", "/users".into(), &headers, Some(body)).await {
        return failure;
    }
    if let Some((status, body)) = state.create_reply.lock().await.clone() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::CREATED);
        return (status, body).into_response();
    }
    let mut created = echo;
    if let Some(object) = created.as_object_mut() {
        object.insert("id".into(), Value::from(11));
    }
    (StatusCode::CREATED, Json(created)).into_response()
}

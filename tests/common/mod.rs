// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use eco_tracker::config::Config;
use eco_tracker::notify::{self, Notification, Notifications};
use eco_tracker::session::{AuthState, Session, SessionUser};
use eco_tracker::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test-id-token";
pub const TEST_EMAIL: &str = "fern@example.com";
pub const TEST_USER_ID: &str = "user-1";

/// A request as the mock backend saw it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Shared {
    hits: AtomicUsize,
    routes: Mutex<HashMap<(Method, String), (StatusCode, Value)>>,
    requests: Mutex<Vec<Recorded>>,
}

/// In-process backend answering canned JSON per method and path.
/// Unknown routes get 404 with a `message` body.
pub struct MockBackend {
    pub url: String,
    shared: Arc<Shared>,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("No local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self {
            url: format!("http://{}", addr),
            shared,
        }
    }

    /// Answer `method path` with `status` and JSON `body` from now on.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).expect("Invalid status");
        self.shared
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body));
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.shared.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.shared.requests.lock().unwrap().last().cloned()
    }

    /// Requests to `path` with `method`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared.hits.fetch_add(1, Ordering::SeqCst);

    let path = uri.path().to_string();
    shared.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = shared.routes.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response(),
    }
}

#[allow(dead_code)]
pub fn test_session() -> Session {
    Session::new(
        SessionUser {
            id: TEST_USER_ID.to_string(),
            email: TEST_EMAIL.to_string(),
            display_name: Some("Fern".to_string()),
            photo_url: None,
        },
        TEST_TOKEN,
    )
}

/// Client state pointed at `backend`, signed in as the test user.
#[allow(dead_code)]
pub fn signed_in(backend: &MockBackend) -> (AppState, Notifications) {
    let (state, notifications) = signed_out(backend);
    let mut state = state;
    state.auth = AuthState::SignedIn(test_session());
    (state, notifications)
}

/// Client state pointed at `backend` with nobody signed in.
#[allow(dead_code)]
pub fn signed_out(backend: &MockBackend) -> (AppState, Notifications) {
    let (notifier, notifications) = notify::channel();
    let state = AppState::new(Config::with_backend(&backend.url), notifier)
        .expect("Failed to build client state");
    (state, notifications)
}

/// Messages of every notification queued so far.
#[allow(dead_code)]
pub fn messages(notifications: &mut Notifications) -> Vec<String> {
    notifications
        .drain()
        .into_iter()
        .map(|n: Notification| n.message)
        .collect()
}

#[allow(dead_code)]
pub fn tip_json(id: &str, upvotes: u32, voters: &[&str]) -> Value {
    json!({
        "_id": id,
        "title": format!("Tip {}", id),
        "category": "Energy Saving",
        "content": "Turn off lights when leaving a room.",
        "author": "moss@example.com",
        "authorName": "Moss",
        "upvotes": upvotes,
        "upvotedUsers": voters,
        "createdAt": "2026-03-01T10:00:00Z"
    })
}

#[allow(dead_code)]
pub fn challenge_json(id: &str, title: &str, participants: u32) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "Cut down on single-use plastic.",
        "category": "Waste Reduction",
        "participants": participants,
        "duration": 30,
        "startDate": "2026-01-01",
        "endDate": "2026-12-31",
        "createdBy": "moss@example.com",
        "totalActions": 3
    })
}

#[allow(dead_code)]
pub fn user_challenge_json(id: &str, progress: i32, completed: &[u32]) -> Value {
    json!({
        "_id": id,
        "challenge": challenge_json("c1", "Plastic Free Month", 12),
        "challengeId": "c1",
        "userId": TEST_USER_ID,
        "progress": progress,
        "status": if progress >= 100 { "completed" } else { "active" },
        "completedSteps": completed,
        "totalActions": 3,
        "joinDate": "2026-02-01"
    })
}

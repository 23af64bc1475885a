//! In-process axum stand-in for the text-generation and XRPC endpoints.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Clone)]
pub struct Behavior {
    pub completion: (StatusCode, String),
    pub session: (StatusCode, String),
    pub create_record: (StatusCode, String),
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            completion: (
                StatusCode::OK,
                json!({"choices": [{"message": {"content": "233 days until Y event. Hang in there #TheFinalTrumpDown"}}]})
                    .to_string(),
            ),
            session: (
                StatusCode::OK,
                json!({"accessJwt": "jwt-abc", "did": "did:plc:countdown", "handle": "bot.test"})
                    .to_string(),
            ),
            create_record: (
                StatusCode::OK,
                json!({"uri": "at://did:plc:countdown/app.bsky.feed.post/1", "cid": "bafy"}).to_string(),
            ),
        }
    }
}

/// Requests as received: (Authorization header, JSON body).
#[derive(Default)]
pub struct Seen {
    pub completions: Vec<(Option<String>, Value)>,
    pub sessions: Vec<Value>,
    pub records: Vec<(Option<String>, Value)>,
}

#[derive(Clone)]
struct MockState {
    behavior: Arc<Behavior>,
    seen: Arc<Mutex<Seen>>,
}

type Reply = (StatusCode, [(header::HeaderName, &'static str); 1], String);

fn reply((status, body): (StatusCode, String)) -> Reply {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn completions(
    State(s): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    s.seen
        .lock()
        .unwrap()
        .completions
        .push((authorization(&headers), body));
    reply(s.behavior.completion.clone())
}

async fn create_session(State(s): State<MockState>, Json(body): Json<Value>) -> Reply {
    s.seen.lock().unwrap().sessions.push(body);
    reply(s.behavior.session.clone())
}

async fn create_record(
    State(s): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    s.seen
        .lock()
        .unwrap()
        .records
        .push((authorization(&headers), body));
    reply(s.behavior.create_record.clone())
}

pub struct MockServer {
    /// `http://127.0.0.1:<port>`; serves both the completions path and `/xrpc/*`.
    pub base: String,
    pub seen: Arc<Mutex<Seen>>,
}

impl MockServer {
    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base, COMPLETIONS_PATH)
    }
}

pub async fn spawn(behavior: Behavior) -> MockServer {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let state = MockState {
        behavior: Arc::new(behavior),
        seen: Arc::clone(&seen),
    };
    let app = Router::new()
        .route(COMPLETIONS_PATH, post(completions))
        .route("/xrpc/com.atproto.server.createSession", post(create_session))
        .route("/xrpc/com.atproto.repo.createRecord", post(create_record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockServer { base, seen }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

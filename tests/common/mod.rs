//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;

use cosmic_oracle::api::{create_router, AppState};
use cosmic_oracle::gateway::{ChatGateway, GatewayError};

// ── Stub gateway ───────────────────────────────────────────────

/// Canned gateway answer
#[derive(Clone)]
pub enum Canned {
    Content(Option<String>),
    Status(u16),
}

/// In-process [`ChatGateway`] that records the prompts it receives.
pub struct StubGateway {
    answer: Canned,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl StubGateway {
    pub fn content(text: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Canned::Content(Some(text.to_string())),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            answer: Canned::Content(None),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            answer: Canned::Status(status),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn last_user_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().map(|(_, user)| user.clone())
    }
}

#[async_trait]
impl ChatGateway for StubGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, GatewayError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        match &self.answer {
            Canned::Content(content) => Ok(content.clone()),
            Canned::Status(status) => Err(GatewayError::from_status(*status, "stub".into())),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

pub fn app_with(gateway: Arc<dyn ChatGateway>) -> Router {
    create_router(AppState::new(gateway))
}

// ── Request / response helpers ─────────────────────────────────

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn sample_match_body() -> Value {
    serde_json::json!({
        "userA": {"name": "You", "birthDate": "1990-01-15"},
        "userB": {"name": "Sam", "birthDate": "1988-05-02"}
    })
}

// ── Fake upstream gateway over real HTTP ───────────────────────

#[derive(Clone)]
struct FakeUpstreamState {
    status: StatusCode,
    body: String,
    seen_auth: Arc<Mutex<Vec<String>>>,
    seen_bodies: Arc<Mutex<Vec<Value>>>,
}

async fn fake_completion(
    State(state): State<FakeUpstreamState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> (StatusCode, String) {
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        state.seen_auth.lock().unwrap().push(auth.to_string());
    }
    if let Ok(json) = serde_json::from_slice::<Value>(&body) {
        state.seen_bodies.lock().unwrap().push(json);
    }
    (state.status, state.body.clone())
}

/// A chat-completion endpoint answering every request with the same status
/// and body.
pub struct FakeUpstream {
    pub url: String,
    pub seen_auth: Arc<Mutex<Vec<String>>>,
    pub seen_bodies: Arc<Mutex<Vec<Value>>>,
}

impl FakeUpstream {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let seen_auth = Arc::new(Mutex::new(Vec::new()));
        let seen_bodies = Arc::new(Mutex::new(Vec::new()));
        let state = FakeUpstreamState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            seen_auth: Arc::clone(&seen_auth),
            seen_bodies: Arc::clone(&seen_bodies),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(fake_completion))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/v1/chat/completions", addr),
            seen_auth,
            seen_bodies,
        }
    }

    /// A successful completion whose first choice carries `content`.
    pub async fn answering(content: &str) -> Self {
        let envelope = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ]
        });
        Self::start(200, envelope.to_string()).await
    }
}

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Response;
use ollama_chat_gateway::message::Message;
use ollama_chat_gateway::routes::create_router;
use ollama_chat_gateway::services::ollama::{BackendError, ChatCall, ChatReply, InferenceBackend};
use ollama_chat_gateway::state::AppState;
use serde_json::{Value, json};

/// Records every call and answers from canned data, or fails every call with
/// `failure` when set.
#[derive(Default)]
pub struct MockBackend {
    pub models: Vec<Value>,
    pub reply: Option<ChatReply>,
    pub pull_details: Value,
    pub failure: Option<String>,
    pub list_calls: AtomicUsize,
    pub chat_calls: Mutex<Vec<ChatCall>>,
    pub pulls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn healthy() -> Self {
        Self {
            models: vec![
                json!({"name": "gemma:2b", "size": 1678447520u64, "details": {"family": "gemma"}}),
                json!({"name": "vinallama/vinallama-7b", "size": 4200000000u64}),
            ],
            reply: Some(sample_reply()),
            pull_details: json!({"status": "success"}),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Default::default() }
    }

    pub fn chat_calls(&self) -> Vec<ChatCall> {
        self.chat_calls.lock().unwrap().clone()
    }

    pub fn pulls(&self) -> Vec<String> {
        self.pulls.lock().unwrap().clone()
    }

    fn fail(&self) -> Result<(), BackendError> {
        match &self.failure {
            Some(msg) => Err(BackendError::Other(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn list_models(&self) -> Result<Vec<Value>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.fail()?;
        Ok(self.models.clone())
    }

    async fn chat(&self, call: ChatCall) -> Result<ChatReply, BackendError> {
        self.chat_calls.lock().unwrap().push(call);
        self.fail()?;
        self.reply.clone().ok_or_else(|| BackendError::Other("no reply configured".into()))
    }

    async fn pull(&self, model: &str) -> Result<Value, BackendError> {
        self.pulls.lock().unwrap().push(model.to_string());
        self.fail()?;
        Ok(self.pull_details.clone())
    }
}

pub fn sample_reply() -> ChatReply {
    ChatReply {
        model: "gemma:2b".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        message: Message::new("assistant", "xin chào"),
        done: true,
        total_duration: Some(123),
    }
}

pub fn app_with(backend: Arc<MockBackend>) -> Router {
    create_router().with_state(Arc::new(AppState::new(backend)))
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

//! Client side of the Ollama REST API.
//!
//! Handlers only talk to [`InferenceBackend`]; [`OllamaClient`] is the
//! production implementation and tests swap in their own.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

use crate::message::Message;

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Turn an `OLLAMA_HOST` value into a base URL. Accepts the forms the Ollama
/// server itself reads, e.g. `0.0.0.0`, `127.0.0.1:11434` or `https://box/ollama`.
/// A missing scheme means `http` on port 11434; an explicit `http`/`https`
/// scheme without a port falls back to 80/443.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    let (scheme, rest, default_port) = match raw.split_once("://") {
        Some((scheme, rest)) => {
            let port = match scheme.to_ascii_lowercase().as_str() {
                "http" => 80,
                "https" => 443,
                _ => DEFAULT_OLLAMA_PORT,
            };
            (scheme, rest, port)
        }
        None => ("http", raw, DEFAULT_OLLAMA_PORT),
    };

    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, path.trim_matches('/')),
        None => (rest, ""),
    };
    let authority = if authority.is_empty() { "127.0.0.1" } else { authority };

    // `[::1]` has colons but no port
    let has_port = authority
        .rfind(':')
        .is_some_and(|i| !authority[i..].contains(']'));

    let mut url = if has_port {
        format!("{scheme}://{authority}")
    } else {
        format!("{scheme}://{authority}:{default_port}")
    };
    if !path.is_empty() {
        url.push('/');
        url.push_str(path);
    }
    url
}

#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport failure, or a reply body that did not decode.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Ollama answered with a non-success status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// Ollama reports failures as `{"error": "..."}`; fall back to the raw body
    /// and then to the status line when that shape is missing.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            })
            .unwrap_or_else(|| status.to_string());

        BackendError::Status { status, message }
    }
}

/// Sampling parameters sent with every chat call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChatOptions {
    pub temperature: f64,
    pub num_ctx: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self { temperature: 0.7, num_ctx: 2048 }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCall {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub options: ChatOptions,
}

/// Non-streaming reply of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub model: String,
    pub created_at: String,
    pub message: Message,
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TagsReply {
    #[serde(default)]
    models: Vec<Value>,
}

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn list_models(&self) -> Result<Vec<Value>, BackendError>;

    async fn chat(&self, call: ChatCall) -> Result<ChatReply, BackendError>;

    /// Download a model. Can block for as long as the download takes.
    async fn pull(&self, model: &str) -> Result<Value, BackendError>;
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = normalize_host(&base_url.into());
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BackendError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::from_status(status, &body));
        }
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn list_models(&self) -> Result<Vec<Value>, BackendError> {
        let url = self.url("/api/tags");
        debug!(%url, "listing models");

        let resp = self.http.get(&url).send().await?;
        let tags: TagsReply = Self::decode(resp).await?;
        Ok(tags.models)
    }

    async fn chat(&self, call: ChatCall) -> Result<ChatReply, BackendError> {
        let url = self.url("/api/chat");
        debug!(%url, model = %call.model, messages = call.messages.len(), "forwarding chat");

        let resp = self.http.post(&url).json(&call).send().await?;
        Self::decode(resp).await
    }

    async fn pull(&self, model: &str) -> Result<Value, BackendError> {
        let url = self.url("/api/pull");
        debug!(%url, %model, "pulling model");

        let resp = self
            .http
            .post(&url)
            .json(&json!({ "model": model, "stream": false }))
            .send()
            .await?;
        Self::decode(resp).await
    }
}

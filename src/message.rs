// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_MODEL: &str = "gemma:2b";

/// One conversation turn. The role ("system", "user", "assistant", ...) is
/// passed through to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_model")]
    #[schema(default = "gemma:2b", example = "gemma:2b")]
    pub model: String,
    /// Must be false; streaming replies are rejected with 400.
    #[serde(default)]
    pub stream: bool,
    /// Backend tuning parameters. Accepted but not forwarded.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub options: Option<Map<String, Value>>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub message: Message,
    pub model: String,
    pub created_at: String,
    pub done: bool,
    pub total_duration: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub status: String,
    #[schema(value_type = Vec<Object>)]
    pub models: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelsResponse {
    #[schema(value_type = Vec<Object>)]
    pub models: Vec<Value>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PullParams {
    /// Model identifier, e.g. `llama2` or `gemma:2b`.
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PullResponse {
    pub status: String,
    /// Ollama's pull reply, unmodified.
    #[schema(value_type = Object)]
    pub details: Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

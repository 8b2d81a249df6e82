use tracing::{debug, info};

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse, Message};
use crate::services::ollama::{ChatCall, ChatOptions, ChatReply, InferenceBackend};

pub const SYSTEM_PROMPT: &str =
    "Bạn là trợ lý AI. Luôn trả lời bằng tiếng Việt nếu người dùng hỏi bằng tiếng Việt.";

pub fn system_message() -> Message {
    Message::new("system", SYSTEM_PROMPT)
}

/// The system prompt followed by the caller's history, order preserved.
pub fn build_conversation(history: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(system_message());
    messages.extend_from_slice(history);
    messages
}

pub fn build_chat_call(request: &ChatRequest) -> ChatCall {
    ChatCall {
        model: request.model.clone(),
        messages: build_conversation(&request.messages),
        stream: request.stream,
        options: ChatOptions::default(),
    }
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        ChatResponse {
            message: reply.message,
            model: reply.model,
            created_at: reply.created_at,
            done: reply.done,
            total_duration: reply.total_duration,
        }
    }
}

pub async fn generate_reply(
    backend: &dyn InferenceBackend,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    if request.stream {
        return Err(AppError::StreamingUnsupported);
    }

    if let Some(options) = &request.options {
        debug!(keys = ?options.keys().collect::<Vec<_>>(), "ignoring caller-supplied options");
    }

    let call = build_chat_call(&request);
    info!(model = %call.model, turns = request.messages.len(), "chat request");

    let reply = backend.chat(call).await?;
    Ok(reply.into())
}

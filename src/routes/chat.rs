use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use utoipa::OpenApi;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, ErrorBody, Message},
    services::chatbot::generate_reply,
    state::SharedState,
};

#[derive(OpenApi)]
#[openapi(paths(chat_handler), components(schemas(ChatRequest, ChatResponse, Message, ErrorBody)))]
pub struct ChatApi;

/// Send a conversation to the model and return its reply.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatResponse),
        (status = 400, description = "Streaming requested", body = ErrorBody),
        (status = 422, description = "Body does not match the schema", body = ErrorBody),
        (status = 500, description = "Ollama call failed", body = ErrorBody),
    )
)]
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let reply = generate_reply(state.backend.as_ref(), request).await?;
    Ok(Json(reply))
}

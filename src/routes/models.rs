use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use utoipa::OpenApi;

use crate::{
    error::AppError,
    message::{ErrorBody, ModelsResponse, PingResponse, PullParams, PullResponse},
    services::models,
    state::SharedState,
};

#[derive(OpenApi)]
#[openapi(
    paths(ping_handler, models_handler, pull_handler),
    components(schemas(PingResponse, ModelsResponse, PullResponse, ErrorBody))
)]
pub struct ModelsApi;

/// Check that Ollama is reachable.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "models",
    responses(
        (status = 200, description = "Ollama reachable", body = PingResponse),
        (status = 500, description = "Ollama call failed", body = ErrorBody),
    )
)]
pub async fn ping_handler(State(state): State<SharedState>) -> Result<Json<PingResponse>, AppError> {
    Ok(Json(models::ping(state.backend.as_ref()).await?))
}

/// List the models installed in Ollama.
#[utoipa::path(
    get,
    path = "/models",
    tag = "models",
    responses(
        (status = 200, description = "Installed models", body = ModelsResponse),
        (status = 500, description = "Ollama call failed", body = ErrorBody),
    )
)]
pub async fn models_handler(State(state): State<SharedState>) -> Result<Json<ModelsResponse>, AppError> {
    Ok(Json(models::list_models(state.backend.as_ref()).await?))
}

/// Download a model into Ollama. Returns once the download is complete.
#[utoipa::path(
    post,
    path = "/models/pull",
    tag = "models",
    params(PullParams),
    responses(
        (status = 200, description = "Model pulled", body = PullResponse),
        (status = 422, description = "Missing `model` parameter", body = ErrorBody),
        (status = 500, description = "Ollama call failed", body = ErrorBody),
    )
)]
pub async fn pull_handler(
    State(state): State<SharedState>,
    params: Result<Query<PullParams>, QueryRejection>,
) -> Result<Json<PullResponse>, AppError> {
    let Query(PullParams { model }) = params?;
    Ok(Json(models::pull_model(state.backend.as_ref(), &model).await?))
}

use tracing::info;

use crate::error::AppError;
use crate::message::{ModelsResponse, PingResponse, PullResponse};
use crate::services::ollama::InferenceBackend;

const SUCCESS: &str = "success";

pub async fn ping(backend: &dyn InferenceBackend) -> Result<PingResponse, AppError> {
    let models = backend.list_models().await?;
    Ok(PingResponse { status: SUCCESS.to_string(), models })
}

pub async fn list_models(backend: &dyn InferenceBackend) -> Result<ModelsResponse, AppError> {
    let models = backend.list_models().await?;
    Ok(ModelsResponse { models })
}

// No timeout: large downloads hold the connection until Ollama is done.
pub async fn pull_model(backend: &dyn InferenceBackend, model: &str) -> Result<PullResponse, AppError> {
    info!(%model, "pulling model");
    let details = backend.pull(model).await?;
    info!(%model, "pull finished");
    Ok(PullResponse { status: SUCCESS.to_string(), details })
}

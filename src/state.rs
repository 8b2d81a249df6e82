// src/state.rs
use std::sync::Arc;

use crate::services::ollama::{InferenceBackend, OllamaClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub backend: Arc<dyn InferenceBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    pub fn with_ollama(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(OllamaClient::new(base_url)))
    }
}

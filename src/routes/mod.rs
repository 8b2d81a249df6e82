// src/routes/mod.rs
pub mod chat;
pub mod doc;
pub mod models;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, header::InvalidHeaderValue},
    routing::{get, post},
};
use chat::chat_handler;
use models::{models_handler, ping_handler, pull_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/models", get(models_handler))
        .route("/models/pull", post(pull_handler))
        .route("/chat", post(chat_handler))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", doc::get_docs()))
        .layer(TraceLayer::new_for_http())
}

/// One allowed origin with credentials. Wildcards are not allowed together
/// with credentials, so methods and headers mirror the preflight request.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

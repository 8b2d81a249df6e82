use crate::routes::{chat, models};
use utoipa::OpenApi;

// `version` defaults to CARGO_PKG_VERSION
#[derive(OpenApi)]
#[openapi(info(
    title = "Chatbot API với Ollama",
    description = "Backend cho ứng dụng chatbot sử dụng Ollama model"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(chat::ChatApi::openapi());
    root.merge(models::ModelsApi::openapi());
    root
}

// src/error.rs
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::ErrorBody;
use crate::services::ollama::BackendError;

pub const STREAMING_UNSUPPORTED: &str = "Streaming chưa được hỗ trợ trong ví dụ này";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("{}", STREAMING_UNSUPPORTED)]
    StreamingUnsupported,

    /// Body or query string did not match the request schema.
    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StreamingUnsupported => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            error!(%status, error = %detail, "backend call failed");
        } else {
            warn!(%status, error = %detail, "request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

//! Error types for the web surface

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::{ComposeError, CompositorError};

/// Body returned whenever a required form field is absent
pub const MISSING_INPUTS_MESSAGE: &str = "Please provide all inputs.";

/// Request handling errors
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Missing form field: {0}")]
    MissingInput(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error(transparent)]
    Compose(#[from] CompositorError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::MissingInput(field) => {
                tracing::debug!("Rejecting request, missing {}", field);
                (StatusCode::BAD_REQUEST, MISSING_INPUTS_MESSAGE.to_string())
            }
            WebError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            WebError::Multipart(e) => (e.status(), e.body_text()),
            WebError::Compose(CompositorError::Compose(ComposeError::MissingInput { .. })) => {
                (StatusCode::BAD_REQUEST, MISSING_INPUTS_MESSAGE.to_string())
            }
            WebError::Compose(e) if e.is_client_error() => {
                tracing::info!("Composition rejected: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.user_message())
            }
            WebError::Compose(e) => {
                tracing::error!("Composition failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image.".to_string())
            }
            WebError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        (status, message).into_response()
    }
}

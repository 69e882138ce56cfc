//! # Web Surface
//!
//! The upload form and its handler. Routes:
//!
//! - `GET /` - the form
//! - `POST /generate` - multipart upload, answers with the form and a preview
//! - `GET /health` - liveness probe

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    composition::{ComposeOptions, Composer},
    config::Config,
};

pub mod error;
pub mod handlers;
pub mod page;


pub use error::WebError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<Composer>,
    pub options: ComposeOptions,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            composer: Arc::new(Composer::new(config.font.clone())),
            options: config.compose.clone(),
        }
    }
}

/// Build the application router
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the page question-answering API.
//!
//! Exposes a single chat endpoint plus a health probe:
//! - POST /v1/chat (JSON response, or SSE when Accept: text/event-stream)
//! - GET /health
//!
//! The caller supplies the provider API key in the request body; the
//! gateway threads it through to the provider per call and never stores
//! or logs it.

pub mod handlers;
pub mod server;
pub mod sse;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use pagechat_engine::AnswerEngine;
use tower_http::cors::CorsLayer;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnswerEngine>,
}

/// Builds the gateway router. Browser extensions call from arbitrary
/// origins, so CORS is permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/v1/chat", post(handlers::post_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

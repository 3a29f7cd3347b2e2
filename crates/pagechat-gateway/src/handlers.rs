// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the chat API.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use pagechat_core::{ConversationTurn, PageContext, PagechatError, ProviderErrorKind};

use crate::sse;
use crate::AppState;

/// Request body for POST /v1/chat.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Provider API key, threaded through per request.
    pub api_key: String,
    /// The user's question about the page.
    pub query: String,
    /// Extracted page context.
    pub context: PageContext,
    /// Prior conversation turns, oldest first.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl std::fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRequest")
            .field("api_key", &"[redacted]")
            .field("query", &self.query)
            .field("context", &self.context)
            .field("history", &self.history)
            .finish()
    }
}

/// Response body for POST /v1/chat.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// The complete answer text.
    pub answer: String,
    /// Model that produced the answer.
    pub model_used: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Caller-facing error description.
    pub error: String,
    /// Provider failure classification, when the error came from the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub(crate) fn status_for(error: &PagechatError) -> StatusCode {
    match error.provider_kind() {
        Some(ProviderErrorKind::InvalidCredential) => StatusCode::UNAUTHORIZED,
        Some(ProviderErrorKind::QuotaExceeded) => StatusCode::TOO_MANY_REQUESTS,
        Some(ProviderErrorKind::ContentFiltered) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(ProviderErrorKind::CapacityExceeded) => StatusCode::PAYLOAD_TOO_LARGE,
        Some(ProviderErrorKind::Unknown) | None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Caller-facing text for an error. Credential, quota, and safety
/// failures use fixed messages rather than echoing provider text.
pub(crate) fn caller_message(error: &PagechatError) -> String {
    match error.provider_kind() {
        Some(
            kind @ (ProviderErrorKind::InvalidCredential
            | ProviderErrorKind::QuotaExceeded
            | ProviderErrorKind::ContentFiltered),
        ) => kind.user_message().to_string(),
        _ => error.to_string(),
    }
}

pub(crate) fn error_response(error: &PagechatError) -> Response {
    let body = ErrorResponse {
        error: caller_message(error),
        kind: error.provider_kind().map(|k| k.to_string()),
    };
    (status_for(error), Json(body)).into_response()
}

/// POST /v1/chat
///
/// Answers a question about a page. Returns JSON, or an SSE stream when
/// the Accept header contains "text/event-stream".
pub async fn post_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Response {
    let accept = headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        %request_id,
        url = %body.context.url,
        streaming = accept.contains("text/event-stream"),
        "chat request"
    );

    if accept.contains("text/event-stream") {
        return sse::stream_chat(state, body).await;
    }

    match state
        .engine
        .answer(&body.context, &body.query, &body.history, &body.api_key)
        .await
    {
        Ok(answer) => {
            tracing::info!(%request_id, model_used = %answer.model, "chat request complete");
            (
                StatusCode::OK,
                Json(ChatResponse {
                    answer: answer.text,
                    model_used: answer.model,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(%request_id, error = %e, "chat request failed");
            error_response(&e)
        }
    }
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

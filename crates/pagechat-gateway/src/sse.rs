// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-Sent Events streaming for POST /v1/chat.
//!
//! When clients send Accept: text/event-stream, the gateway streams answer
//! fragments as they arrive from the provider.
//!
//! SSE event format:
//! ```text
//! event: text_delta
//! data: {"text": "partial content here"}
//!
//! event: message_stop
//! data: {"content": "full content", "modelUsed": "..."}
//! ```
//!
//! Failures before the first fragment are plain HTTP errors; once the
//! stream is open, failures arrive as a terminal `error` event.

use std::convert::Infallible;

use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use futures::stream::{self, StreamExt};

use pagechat_core::FragmentStream;

use crate::handlers::{caller_message, error_response, ChatRequest};
use crate::AppState;

struct SseState {
    fragments: FragmentStream,
    content: String,
    model: String,
    done: bool,
}

/// Stream an answer as Server-Sent Events.
pub async fn stream_chat(state: AppState, body: ChatRequest) -> Response {
    let answer = match state
        .engine
        .answer_stream(&body.context, &body.query, &body.history, &body.api_key)
        .await
    {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, "streaming chat request failed");
            return error_response(&e);
        }
    };

    let initial = SseState {
        fragments: answer.fragments,
        content: String::new(),
        model: answer.model,
        done: false,
    };

    let events = stream::unfold(initial, |mut st| async move {
        if st.done {
            return None;
        }
        let event: Result<Event, Infallible> = match st.fragments.next().await {
            Some(Ok(fragment)) => {
                st.content.push_str(&fragment);
                let data = serde_json::json!({ "text": fragment });
                Ok(Event::default().event("text_delta").data(data.to_string()))
            }
            Some(Err(e)) => {
                st.done = true;
                tracing::warn!(error = %e, "chat stream aborted");
                let data = serde_json::json!({
                    "error": caller_message(&e),
                    "kind": e.provider_kind().map(|k| k.to_string()),
                });
                Ok(Event::default().event("error").data(data.to_string()))
            }
            None => {
                st.done = true;
                tracing::info!(model_used = %st.model, "chat stream complete");
                let data = serde_json::json!({
                    "content": st.content,
                    "modelUsed": st.model,
                });
                Ok(Event::default()
                    .event("message_stop")
                    .data(data.to_string()))
            }
        };
        Some((event, st))
    });

    Sse::new(events).into_response()
}

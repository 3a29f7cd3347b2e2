// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SSE parser for Gemini `streamGenerateContent?alt=sse` responses.
//!
//! Gemini streams unnamed SSE events whose `data` payloads are
//! [`GenerateContentResponse`] chunks. The `eventsource-stream` crate
//! handles SSE protocol framing; this module deserializes each payload.

use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures::stream::{Stream, StreamExt};
use pagechat_core::PagechatError;

use crate::types::GenerateContentResponse;

/// Parses a reqwest streaming response into a stream of response chunks.
///
/// Empty data payloads are skipped. Transport and deserialization failures
/// surface as `Err` items, terminating meaningful consumption; already
/// delivered chunks are unaffected.
pub fn parse_sse_stream(
    response: reqwest::Response,
) -> Pin<Box<dyn Stream<Item = Result<GenerateContentResponse, PagechatError>> + Send>> {
    let byte_stream = response.bytes_stream();
    let event_stream = byte_stream.eventsource();

    let mapped = event_stream.filter_map(|result| async move {
        match result {
            Ok(event) => {
                if event.data.trim().is_empty() {
                    return None;
                }
                Some(
                    serde_json::from_str::<GenerateContentResponse>(&event.data).map_err(|e| {
                        PagechatError::provider(format!("failed to parse stream chunk: {e}"))
                    }),
                )
            }
            Err(e) => Some(Err(PagechatError::provider(format!("SSE stream error: {e}")))),
        }
    });

    Box::pin(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    /// Serves raw SSE text through wiremock to get a real reqwest::Response.
    async fn mock_sse_response(sse_text: &str) -> reqwest::Response {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(sse_text.to_string()),
            )
            .mount(&server)
            .await;

        reqwest::get(&server.uri()).await.unwrap()
    }

    #[tokio::test]
    async fn parses_text_chunks_in_order() {
        let sse = concat!(
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel\"}]}}]}\n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"lo\"}]},\"finishReason\":\"STOP\"}]}\n\n",
        );
        let response = mock_sse_response(sse).await;
        let mut stream = parse_sse_stream(response);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.text(), "Hel");
        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second.text(), "lo");
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn empty_data_events_are_skipped() {
        let sse = concat!(
            "data: \n\n",
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"ok\"}]}}]}\n\n",
        );
        let response = mock_sse_response(sse).await;
        let mut stream = parse_sse_stream(response);

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.text(), "ok");
    }

    #[tokio::test]
    async fn malformed_chunk_surfaces_error() {
        let sse = "data: {not json}\n\n";
        let response = mock_sse_response(sse).await;
        let mut stream = parse_sse_stream(response);

        let err = stream.next().await.unwrap().unwrap_err();
        assert!(err.to_string().contains("failed to parse stream chunk"));
    }
}

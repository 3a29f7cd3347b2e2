// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! The client holds only a pooled [`reqwest::Client`] and the base URL.
//! The caller's API key rides on each request via the `x-goog-api-key`
//! header, so concurrent requests with different credentials share pooled
//! connections but never credential state.

use std::pin::Pin;
use std::time::Duration;

use futures::Stream;
use pagechat_core::PagechatError;
use tracing::debug;

use crate::sse;
use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Base URL for the Gemini REST API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini API client with connection pooling.
    pub fn new() -> Result<Self, PagechatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| {
                PagechatError::provider(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a non-streaming request and returns the full response.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
        credential: &str,
    ) -> Result<GenerateContentResponse, PagechatError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential)
            .json(request)
            .send()
            .await
            .map_err(|e| PagechatError::provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        debug!(status = %status, model, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PagechatError::provider(format!("failed to read response body: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| PagechatError::provider(format!("failed to parse API response: {e}")))
    }

    /// Sends a streaming request and returns a stream of response chunks.
    pub async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
        credential: &str,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<GenerateContentResponse, PagechatError>> + Send>>,
        PagechatError,
    > {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, model
        );
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential)
            .json(request)
            .send()
            .await
            .map_err(|e| PagechatError::provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        debug!(status = %status, model, "streamGenerateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        Ok(sse::parse_sse_stream(response))
    }
}

/// Builds a classified provider error from a non-success response body.
///
/// The gRPC status name (e.g. `RESOURCE_EXHAUSTED`) is folded into the
/// message so the classification table can match on it even when the
/// human-readable message lacks a recognizable phrase.
fn api_error(status: reqwest::StatusCode, body: &str) -> PagechatError {
    let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(body) {
        match api_err.error.status {
            Some(grpc_status) => {
                format!("Gemini API error ({grpc_status}): {}", api_err.error.message)
            }
            None => format!("Gemini API error: {}", api_err.error.message),
        }
    } else {
        format!("Gemini API returned {status}: {body}")
    };
    PagechatError::provider(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagechat_core::ProviderErrorKind;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new().unwrap().with_base_url(base_url.to_string())
    }

    fn test_request() -> GenerateContentRequest {
        GenerateContentRequest::from_prompt("Hello", 1024)
    }

    #[tokio::test]
    async fn generate_content_success() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi there!"}]},
                "finishReason": "STOP"
            }]
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Hello"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client
            .generate_content("gemini-test", &test_request(), "test-api-key")
            .await
            .unwrap();

        assert_eq!(result.text(), "Hi there!");
    }

    #[tokio::test]
    async fn invalid_key_classifies_as_invalid_credential() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_content("gemini-test", &test_request(), "bad-key")
            .await
            .unwrap_err();

        assert_eq!(err.provider_kind(), Some(ProviderErrorKind::InvalidCredential));
        assert!(err.to_string().contains("API key not valid"), "got: {err}");
    }

    #[tokio::test]
    async fn resource_exhausted_classifies_as_quota() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {
                "code": 429,
                "message": "You have sent too many requests",
                "status": "RESOURCE_EXHAUSTED"
            }
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_content("gemini-test", &test_request(), "key")
            .await
            .unwrap_err();

        assert_eq!(err.provider_kind(), Some(ProviderErrorKind::QuotaExceeded));
    }

    #[tokio::test]
    async fn unparseable_error_body_preserves_raw_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .generate_content("gemini-test", &test_request(), "key")
            .await
            .unwrap_err();

        assert_eq!(err.provider_kind(), Some(ProviderErrorKind::Unknown));
        assert!(err.to_string().contains("oops"), "got: {err}");
    }

    #[tokio::test]
    async fn stream_error_status_classified_before_streaming() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {
                "code": 400,
                "message": "input token count exceeds the limit of 1048576",
                "status": "INVALID_ARGUMENT"
            }
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-test:streamGenerateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .stream_generate_content("gemini-test", &test_request(), "key")
            .await
            .err()
            .expect("expected error");

        assert_eq!(err.provider_kind(), Some(ProviderErrorKind::CapacityExceeded));
    }
}

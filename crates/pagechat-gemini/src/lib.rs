// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter for Pagechat.
//!
//! This crate implements [`ModelProvider`] for the Gemini `generateContent`
//! API, providing both single-shot generation and streaming SSE responses.
//! The caller's API key is threaded through every call; nothing per-caller
//! is stored on the adapter.

pub mod client;
pub mod sse;
pub mod types;

use async_trait::async_trait;
use futures::StreamExt;
use pagechat_config::model::GeminiConfig;
use pagechat_core::{FragmentStream, ModelProvider, PagechatError, ProviderErrorKind};
use tracing::debug;

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Gemini provider implementing [`ModelProvider`].
pub struct GeminiProvider {
    client: GeminiClient,
    max_output_tokens: u32,
}

impl GeminiProvider {
    /// Creates a new Gemini provider from the given configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self, PagechatError> {
        Ok(Self {
            client: GeminiClient::new()?,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient, max_output_tokens: u32) -> Self {
        Self {
            client,
            max_output_tokens,
        }
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<String, PagechatError> {
        let request = GenerateContentRequest::from_prompt(prompt, self.max_output_tokens);
        let response = self
            .client
            .generate_content(model, &request, credential)
            .await?;

        if let Some(reason) = response.block_reason() {
            return Err(PagechatError::provider_with_kind(
                ProviderErrorKind::ContentFiltered,
                reason,
            ));
        }

        debug!(model, "generation complete");
        Ok(response.text())
    }

    async fn generate_stream(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<FragmentStream, PagechatError> {
        let request = GenerateContentRequest::from_prompt(prompt, self.max_output_tokens);
        let chunk_stream = self
            .client
            .stream_generate_content(model, &request, credential)
            .await?;

        let fragments = chunk_stream.filter_map(|result| async move {
            match result {
                Ok(chunk) => {
                    if let Some(reason) = chunk.block_reason() {
                        return Some(Err(PagechatError::provider_with_kind(
                            ProviderErrorKind::ContentFiltered,
                            reason,
                        )));
                    }
                    let text = chunk.text();
                    if text.is_empty() {
                        // Metadata-only chunks (finish reason, usage) carry no text.
                        None
                    } else {
                        Some(Ok(text))
                    }
                }
                Err(e) => Some(Err(e)),
            }
        });

        Ok(Box::pin(fragments))
    }
}

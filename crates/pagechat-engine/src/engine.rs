// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Answer orchestration: model tier selection and fallback discipline.

use std::sync::Arc;

use pagechat_config::GeminiConfig;
use pagechat_core::{
    ConversationTurn, FragmentStream, ModelProvider, ModelTier, PageContext, PagechatError,
    ProviderErrorKind,
};

use crate::prompt::PromptBuilder;
use crate::stream::NonEmptyStream;

/// A complete answer together with the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub model: String,
}

/// A streaming answer. The model is known before the first fragment
/// arrives, so callers can report it up front.
pub struct AnswerStream {
    pub fragments: FragmentStream,
    pub model: String,
}

/// Orchestrates a single question-answer exchange against a model provider.
///
/// Prompt size decides the initial model tier: prompts whose estimated
/// token count stays at or below the configured threshold go to the
/// primary model, larger ones go straight to the fallback. A primary
/// request rejected for capacity is retried exactly once on the fallback
/// model; every other failure, and any fallback failure, is terminal.
pub struct AnswerEngine {
    provider: Arc<dyn ModelProvider>,
    config: GeminiConfig,
    prompt_builder: PromptBuilder,
}

impl AnswerEngine {
    pub fn new(provider: Arc<dyn ModelProvider>, config: GeminiConfig) -> Self {
        let prompt_builder = PromptBuilder::new(config.max_page_text_chars);
        Self {
            provider,
            config,
            prompt_builder,
        }
    }

    /// Estimates the token count of a prompt from its byte length.
    ///
    /// Uses a fixed chars-per-token ratio. Byte length overestimates
    /// for multi-byte text, which only ever pushes a borderline prompt
    /// to the larger-context fallback model. A zero ratio (rejected by
    /// config validation, but representable) is clamped to 1.
    pub fn estimate_tokens(&self, prompt: &str) -> u32 {
        (prompt.len() / self.config.chars_per_token.max(1) as usize) as u32
    }

    /// Picks the model tier for an estimated token count. The threshold
    /// itself still selects the primary model.
    pub fn select_tier(&self, estimated_tokens: u32) -> ModelTier {
        if estimated_tokens <= self.config.token_threshold {
            ModelTier::Primary
        } else {
            ModelTier::Fallback
        }
    }

    fn model_for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Primary => &self.config.primary_model,
            ModelTier::Fallback => &self.config.fallback_model,
        }
    }

    /// A capacity rejection of the primary model is the only failure
    /// that earns a retry, and only onto the fallback model.
    fn should_fall_back(tier: ModelTier, error: &PagechatError) -> bool {
        tier == ModelTier::Primary
            && error.provider_kind() == Some(ProviderErrorKind::CapacityExceeded)
    }

    fn prepare(
        &self,
        context: &PageContext,
        query: &str,
        history: &[ConversationTurn],
    ) -> (String, ModelTier) {
        let prompt = self.prompt_builder.build(context, query, history);
        let estimated = self.estimate_tokens(&prompt);
        let tier = self.select_tier(estimated);
        tracing::info!(
            model = %self.model_for_tier(tier),
            estimated_tokens = estimated,
            "selected model"
        );
        (prompt, tier)
    }

    /// Produces a complete answer for the query against the page context.
    pub async fn answer(
        &self,
        context: &PageContext,
        query: &str,
        history: &[ConversationTurn],
        credential: &str,
    ) -> Result<Answer, PagechatError> {
        let (prompt, tier) = self.prepare(context, query, history);
        let model = self.model_for_tier(tier).to_string();

        match self.provider.generate(&model, &prompt, credential).await {
            Ok(text) => Self::non_empty(text, model),
            Err(e) if Self::should_fall_back(tier, &e) => {
                let fallback = self.config.fallback_model.clone();
                tracing::warn!(
                    error = %e,
                    fallback = %fallback,
                    "primary model over capacity, retrying on fallback"
                );
                let text = self.provider.generate(&fallback, &prompt, credential).await?;
                Self::non_empty(text, fallback)
            }
            Err(e) => Err(e),
        }
    }

    /// Produces a fragment stream for the query against the page context.
    ///
    /// Fallback applies only when the initial call is rejected; an error
    /// after fragments have started flowing is terminal.
    pub async fn answer_stream(
        &self,
        context: &PageContext,
        query: &str,
        history: &[ConversationTurn],
        credential: &str,
    ) -> Result<AnswerStream, PagechatError> {
        let (prompt, tier) = self.prepare(context, query, history);
        let model = self.model_for_tier(tier).to_string();

        match self
            .provider
            .generate_stream(&model, &prompt, credential)
            .await
        {
            Ok(fragments) => Ok(AnswerStream {
                fragments: Box::pin(NonEmptyStream::new(fragments)),
                model,
            }),
            Err(e) if Self::should_fall_back(tier, &e) => {
                let fallback = self.config.fallback_model.clone();
                tracing::warn!(
                    error = %e,
                    fallback = %fallback,
                    "primary model over capacity, retrying on fallback"
                );
                let fragments = self
                    .provider
                    .generate_stream(&fallback, &prompt, credential)
                    .await?;
                Ok(AnswerStream {
                    fragments: Box::pin(NonEmptyStream::new(fragments)),
                    model: fallback,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn non_empty(text: String, model: String) -> Result<Answer, PagechatError> {
        if text.is_empty() {
            return Err(PagechatError::provider_with_kind(
                ProviderErrorKind::Unknown,
                "empty response",
            ));
        }
        Ok(Answer { text, model })
    }
}

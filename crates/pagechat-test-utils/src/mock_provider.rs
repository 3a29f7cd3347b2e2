// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock model provider for deterministic testing.
//!
//! Responses are scripted per model identifier and popped FIFO. Every call
//! is recorded, so tests can assert exactly which models were invoked, in
//! which order, and with which prompts.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream;

use pagechat_core::{
    FragmentStream, ModelProvider, PagechatError, ProviderErrorKind,
};

/// A scripted outcome for one provider call.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Succeed with the given text (one fragment in streaming mode).
    Text(String),
    /// Fail the call with a classified provider error.
    Failure {
        kind: ProviderErrorKind,
        message: String,
    },
    /// Succeed with the given fragments (concatenated in non-streaming mode).
    Fragments(Vec<String>),
    /// Stream the given fragments, then abort with an error item.
    FragmentsThenFailure {
        fragments: Vec<String>,
        kind: ProviderErrorKind,
        message: String,
    },
}

/// One recorded provider invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub model: String,
    pub prompt: String,
    pub credential: String,
    pub streaming: bool,
}

/// A mock [`ModelProvider`] with per-model scripted responses.
///
/// When no script is queued for a model, calls succeed with the default
/// text "mock response".
#[derive(Default)]
pub struct MockModelProvider {
    scripts: Mutex<HashMap<String, VecDeque<ScriptedResponse>>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockModelProvider {
    /// Creates a mock provider with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a scripted response for the given model identifier.
    pub fn script(&self, model: &str, response: ScriptedResponse) {
        self.scripts
            .lock()
            .expect("scripts lock poisoned")
            .entry(model.to_string())
            .or_default()
            .push_back(response);
    }

    /// Returns a snapshot of all recorded invocations.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .expect("invocations lock poisoned")
            .clone()
    }

    /// Returns the models invoked so far, in call order.
    pub fn invoked_models(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|i| i.model)
            .collect()
    }

    fn record(&self, model: &str, prompt: &str, credential: &str, streaming: bool) {
        self.invocations
            .lock()
            .expect("invocations lock poisoned")
            .push(Invocation {
                model: model.to_string(),
                prompt: prompt.to_string(),
                credential: credential.to_string(),
                streaming,
            });
    }

    fn next_script(&self, model: &str) -> Option<ScriptedResponse> {
        self.scripts
            .lock()
            .expect("scripts lock poisoned")
            .get_mut(model)
            .and_then(VecDeque::pop_front)
    }
}

#[async_trait]
impl ModelProvider for MockModelProvider {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<String, PagechatError> {
        self.record(model, prompt, credential, false);
        match self.next_script(model) {
            Some(ScriptedResponse::Text(text)) => Ok(text),
            Some(ScriptedResponse::Fragments(fragments)) => Ok(fragments.concat()),
            Some(ScriptedResponse::Failure { kind, message })
            | Some(ScriptedResponse::FragmentsThenFailure { kind, message, .. }) => {
                Err(PagechatError::provider_with_kind(kind, message))
            }
            None => Ok("mock response".to_string()),
        }
    }

    async fn generate_stream(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<FragmentStream, PagechatError> {
        self.record(model, prompt, credential, true);
        match self.next_script(model) {
            Some(ScriptedResponse::Text(text)) => {
                Ok(Box::pin(stream::iter(vec![Ok(text)])))
            }
            Some(ScriptedResponse::Fragments(fragments)) => Ok(Box::pin(stream::iter(
                fragments.into_iter().map(Ok).collect::<Vec<_>>(),
            ))),
            Some(ScriptedResponse::FragmentsThenFailure {
                fragments,
                kind,
                message,
            }) => {
                let mut items: Vec<Result<String, PagechatError>> =
                    fragments.into_iter().map(Ok).collect();
                items.push(Err(PagechatError::provider_with_kind(kind, message)));
                Ok(Box::pin(stream::iter(items)))
            }
            Some(ScriptedResponse::Failure { kind, message }) => {
                Err(PagechatError::provider_with_kind(kind, message))
            }
            None => Ok(Box::pin(stream::iter(vec![Ok(
                "mock response".to_string()
            )]))),
        }
    }
}

// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`ModelProvider`] trait consumed by the answer engine.
//!
//! A provider adapter handles communication with a language-model API,
//! supporting both single-shot generation and streaming responses. The
//! caller's credential is threaded through every call rather than stored
//! in the adapter, so concurrent requests with different keys never share
//! credential state.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::error::PagechatError;

/// A lazy, finite, non-restartable sequence of generated text fragments.
///
/// Fragments arrive in generation order; their concatenation equals the full
/// answer. Dropping the stream before completion releases the underlying
/// provider connection. A mid-stream provider failure surfaces as an `Err`
/// item after any fragments already yielded.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, PagechatError>> + Send>>;

/// Adapter for a remote language-model provider.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Generates a complete response for `prompt` using the given model.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<String, PagechatError>;

    /// Generates a response incrementally, returning a fragment stream.
    async fn generate_stream(
        &self,
        model: &str,
        prompt: &str,
        credential: &str,
    ) -> Result<FragmentStream, PagechatError>;
}

// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction and answer orchestration for Pagechat.
//!
//! This crate contains the two components at the heart of the service:
//!
//! - [`PromptBuilder`]: pure, deterministic rendering of page context, user
//!   query, and conversation history into a single prompt string, with
//!   bounded page-text truncation.
//! - [`AnswerEngine`]: token estimation, model tier selection, provider
//!   invocation with a single capacity-triggered fallback retry, and
//!   streaming or non-streaming delivery with empty-response detection.

pub mod engine;
pub mod prompt;
mod stream;

pub use engine::{Answer, AnswerEngine, AnswerStream};
pub use prompt::{PromptBuilder, TRUNCATION_MARKER};

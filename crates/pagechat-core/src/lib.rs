// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pagechat question-answering service.
//!
//! This crate provides the foundational types shared across the Pagechat
//! workspace: the error taxonomy with its provider-message classification
//! table, the page context and conversation types, and the [`ModelProvider`]
//! trait implemented by provider adapters.

pub mod error;
pub mod provider;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{classify_provider_message, PagechatError, ProviderErrorKind};
pub use provider::{FragmentStream, ModelProvider};
pub use types::{ConversationTurn, ModelTier, PageContext, Role};

// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Pagechat workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Extracted context of a webpage, as supplied by the caller.
///
/// Immutable once constructed. Page-text truncation produces a new value
/// (see `pagechat-engine`), never mutates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageContext {
    /// URL of the page the text was extracted from.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Meta description tag content, when present.
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Meta keywords tag content, when present.
    #[serde(default)]
    pub meta_keywords: Option<String>,
    /// The extracted main text of the page.
    pub page_text: String,
}

/// Sender of a conversation turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn of caller-supplied conversation history.
///
/// Insertion order is chronological order. The most recent turn duplicates
/// the current query and is excluded from prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Selectable model tier.
///
/// `Primary` is the higher-capacity/cost configuration, `Fallback` the
/// lower one. Each tier is bound to a configured model identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTier {
    Primary,
    Fallback,
}

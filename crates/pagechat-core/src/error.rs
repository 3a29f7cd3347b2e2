// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types and the provider-failure classification table.
//!
//! Gemini does not expose a structured error taxonomy, so raw error messages
//! are classified into [`ProviderErrorKind`] by an explicit substring table.
//! The mapping is total: every provider failure lands on exactly one kind,
//! with the original message preserved for diagnostics.

use strum::{Display, EnumString};
use thiserror::Error;

/// Caller-facing classification of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ProviderErrorKind {
    /// The supplied API key was rejected.
    InvalidCredential,
    /// Quota or rate limit exhausted.
    QuotaExceeded,
    /// The request or response was blocked by safety filters.
    ContentFiltered,
    /// The input exceeded the model's context-size limit.
    CapacityExceeded,
    /// Anything the classification table does not recognize.
    Unknown,
}

impl ProviderErrorKind {
    /// Fixed human-readable message for end users.
    ///
    /// Transport layers must use this text for `InvalidCredential`,
    /// `QuotaExceeded`, and `ContentFiltered` instead of the raw provider
    /// message. `Unknown` and `CapacityExceeded` may carry diagnostic detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredential => {
                "Invalid API key. Please check your API key in the settings."
            }
            Self::QuotaExceeded => "API quota exceeded. Please try again later.",
            Self::ContentFiltered => {
                "The content was blocked by safety settings. Please try a different query."
            }
            Self::CapacityExceeded => "The page content is too large for the selected model.",
            Self::Unknown => "An issue occurred while processing your request.",
        }
    }
}

/// Classification rules, checked in order against the lowercased message.
///
/// First match wins. Phrases come from observed Gemini API error bodies and
/// gRPC status names surfaced in REST error messages.
const CLASSIFICATION_RULES: &[(&str, ProviderErrorKind)] = &[
    ("api key not valid", ProviderErrorKind::InvalidCredential),
    ("invalid api key", ProviderErrorKind::InvalidCredential),
    ("api_key_invalid", ProviderErrorKind::InvalidCredential),
    ("permission_denied", ProviderErrorKind::InvalidCredential),
    ("unauthenticated", ProviderErrorKind::InvalidCredential),
    ("quota", ProviderErrorKind::QuotaExceeded),
    ("rate limit", ProviderErrorKind::QuotaExceeded),
    ("resource_exhausted", ProviderErrorKind::QuotaExceeded),
    ("too many requests", ProviderErrorKind::QuotaExceeded),
    ("content filtered", ProviderErrorKind::ContentFiltered),
    ("safety", ProviderErrorKind::ContentFiltered),
    ("blocked", ProviderErrorKind::ContentFiltered),
    ("context length", ProviderErrorKind::CapacityExceeded),
    ("token count exceeds", ProviderErrorKind::CapacityExceeded),
    ("input token count", ProviderErrorKind::CapacityExceeded),
    ("payload size exceeds", ProviderErrorKind::CapacityExceeded),
    ("request too large", ProviderErrorKind::CapacityExceeded),
    ("exceeds the maximum", ProviderErrorKind::CapacityExceeded),
];

/// Classifies a raw provider error message into a [`ProviderErrorKind`].
///
/// Matching is case-insensitive. Messages matching no rule classify as
/// [`ProviderErrorKind::Unknown`].
pub fn classify_provider_message(message: &str) -> ProviderErrorKind {
    let lowered = message.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, kind)| *kind)
        .unwrap_or(ProviderErrorKind::Unknown)
}

/// The primary error type used across Pagechat crates.
#[derive(Debug, Error)]
pub enum PagechatError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider failures, classified into the caller-facing taxonomy.
    #[error("provider error ({kind}): {message}")]
    Provider {
        kind: ProviderErrorKind,
        message: String,
    },

    /// Gateway transport errors (bind failure, closed channels).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PagechatError {
    /// Builds a `Provider` error, classifying the message through the table.
    pub fn provider(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Provider {
            kind: classify_provider_message(&message),
            message,
        }
    }

    /// Builds a `Provider` error with an explicit kind, bypassing the table.
    pub fn provider_with_kind(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self::Provider {
            kind,
            message: message.into(),
        }
    }

    /// Returns the provider kind if this is a provider error.
    pub fn provider_kind(&self) -> Option<ProviderErrorKind> {
        match self {
            Self::Provider { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

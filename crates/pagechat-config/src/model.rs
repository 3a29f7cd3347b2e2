// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Pagechat service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Pagechat configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PagechatConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini model and sizing settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini model tier and request-sizing configuration.
///
/// The token threshold and characters-per-token ratio are heuristics, not
/// guarantees against capacity failures: the engine keeps its fallback path
/// regardless of how these are tuned.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Model identifier for the primary (higher-capacity) tier.
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Model identifier for the fallback (lower-cost) tier.
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    /// Estimated-token threshold above which requests route to the
    /// fallback tier directly.
    #[serde(default = "default_token_threshold")]
    pub token_threshold: u32,

    /// Maximum page-text length in characters before truncation.
    #[serde(default = "default_max_page_text_chars")]
    pub max_page_text_chars: usize,

    /// Approximate characters-per-token ratio used for estimation.
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: u32,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            token_threshold: default_token_threshold(),
            max_page_text_chars: default_max_page_text_chars(),
            chars_per_token: default_chars_per_token(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_primary_model() -> String {
    "gemini-2.5-flash-preview-0417".to_string()
}

fn default_fallback_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_token_threshold() -> u32 {
    200_000
}

fn default_max_page_text_chars() -> usize {
    800_000
}

fn default_chars_per_token() -> u32 {
    4
}

fn default_max_output_tokens() -> u32 {
    8192
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = PagechatConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.gemini.primary_model, "gemini-2.5-flash-preview-0417");
        assert_eq!(config.gemini.fallback_model, "gemini-2.0-flash-lite");
        assert_eq!(config.gemini.token_threshold, 200_000);
        assert_eq!(config.gemini.max_page_text_chars, 800_000);
        assert_eq!(config.gemini.chars_per_token, 4);
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let result: Result<PagechatConfig, _> =
            toml::from_str("[gemini]\nprimry_model = \"typo\"");
        assert!(result.is_err());
    }

    #[test]
    fn partial_section_fills_defaults() {
        let config: PagechatConfig =
            toml::from_str("[gemini]\ntoken_threshold = 1000").unwrap();
        assert_eq!(config.gemini.token_threshold, 1000);
        assert_eq!(config.gemini.chars_per_token, 4);
    }
}

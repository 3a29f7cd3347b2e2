// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pagechat.toml` > `~/.config/pagechat/pagechat.toml`
//! > `/etc/pagechat/pagechat.toml` with environment variable overrides via the
//! `PAGECHAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PagechatConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pagechat/pagechat.toml` (system-wide)
/// 3. `~/.config/pagechat/pagechat.toml` (user XDG config)
/// 4. `./pagechat.toml` (local directory)
/// 5. `PAGECHAT_*` environment variables
pub fn load_config() -> Result<PagechatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PagechatConfig::default()))
        .merge(Toml::file("/etc/pagechat/pagechat.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pagechat/pagechat.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pagechat.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<PagechatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PagechatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PagechatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PagechatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PAGECHAT_GEMINI_TOKEN_THRESHOLD` must
/// map to `gemini.token_threshold`, not `gemini.token.threshold`.
fn env_provider() -> Env {
    Env::prefixed("PAGECHAT_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: PAGECHAT_GEMINI_PRIMARY_MODEL -> "gemini_primary_model"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("gemini_", "gemini.", 1);
        mapped.into()
    })
}

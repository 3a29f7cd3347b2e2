// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Pagechat service.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides. Configuration is read once at startup and never
//! mutated during request processing.
//!
//! # Usage
//!
//! ```no_run
//! use pagechat_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Primary model: {}", config.gemini.primary_model);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{GeminiConfig, PagechatConfig, ServerConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// Loads config from TOML files plus env vars via Figment, then runs
/// post-deserialization validation. Returns either a valid
/// [`PagechatConfig`] or the full list of collected errors.
pub fn load_and_validate() -> Result<PagechatConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Load {
            message: err.to_string(),
        }]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<PagechatConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Load {
            message: err.to_string(),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = load_and_validate_str("").expect("default config should validate");
        assert_eq!(config.gemini.chars_per_token, 4);
        assert_eq!(config.gemini.token_threshold, 200_000);
    }

    #[test]
    fn invalid_toml_reports_load_error() {
        let errors = load_and_validate_str("gemini = \"not a table\"").unwrap_err();
        assert!(matches!(errors[0], ConfigError::Load { .. }));
    }

    #[test]
    fn invalid_values_report_validation_errors() {
        let errors =
            load_and_validate_str("[gemini]\nchars_per_token = 0\ntoken_threshold = 0")
                .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. })));
    }
}

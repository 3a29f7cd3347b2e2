// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty model identifiers and positive sizing
//! parameters.

use crate::diagnostic::ConfigError;
use crate::model::PagechatConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PagechatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    }

    if config.gemini.primary_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.primary_model must not be empty".to_string(),
        });
    }

    if config.gemini.fallback_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.fallback_model must not be empty".to_string(),
        });
    }

    if config.gemini.token_threshold == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.token_threshold must be positive".to_string(),
        });
    }

    if config.gemini.chars_per_token == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.chars_per_token must be at least 1".to_string(),
        });
    }

    if config.gemini.max_page_text_chars == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_page_text_chars must be positive".to_string(),
        });
    }

    if config.gemini.max_output_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_output_tokens must be positive".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PagechatConfig;

    #[test]
    fn default_config_passes_validation() {
        assert!(validate_config(&PagechatConfig::default()).is_ok());
    }

    #[test]
    fn empty_model_identifiers_are_rejected() {
        let mut config = PagechatConfig::default();
        config.gemini.primary_model = "  ".to_string();
        config.gemini.fallback_model = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn zero_sizing_parameters_are_rejected() {
        let mut config = PagechatConfig::default();
        config.gemini.token_threshold = 0;
        config.gemini.chars_per_token = 0;
        config.gemini.max_page_text_chars = 0;
        config.gemini.max_output_tokens = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = PagechatConfig::default();
        config.server.host = String::new();
        config.gemini.token_threshold = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}

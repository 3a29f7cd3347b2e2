// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics rendered via miette.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic metadata.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Figment failed to load or deserialize the configuration.
    #[error("failed to load configuration: {message}")]
    #[diagnostic(
        code(pagechat::config::load),
        help("check pagechat.toml syntax and PAGECHAT_* environment variables")
    )]
    Load {
        /// Description of the load failure.
        message: String,
    },

    /// A semantic validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(pagechat::config::validation))]
    Validation {
        /// Description of the invalid value.
        message: String,
    },
}

/// Render a list of configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("error: {error}");
        if let Some(help) = error.help() {
            eprintln!("  help: {help}");
        }
    }
}

// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pagechat serve` command implementation.
//!
//! Wires the Gemini provider into the answer engine and serves the HTTP
//! gateway until the process is interrupted.

use std::sync::Arc;

use pagechat_config::PagechatConfig;
use pagechat_core::PagechatError;
use pagechat_engine::AnswerEngine;
use pagechat_gateway::{server, AppState};
use pagechat_gemini::GeminiProvider;
use tracing::info;

/// Runs the `pagechat serve` command.
pub async fn run_serve(config: PagechatConfig) -> Result<(), PagechatError> {
    init_tracing(&config.server.log_level);

    info!(
        primary_model = config.gemini.primary_model.as_str(),
        fallback_model = config.gemini.fallback_model.as_str(),
        token_threshold = config.gemini.token_threshold,
        "starting pagechat serve"
    );

    let provider = Arc::new(GeminiProvider::new(&config.gemini)?);
    let engine = Arc::new(AnswerEngine::new(provider, config.gemini.clone()));
    let state = AppState { engine };

    tokio::select! {
        result = server::start_server(&config.server, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("pagechat serve shutdown complete");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pagechat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

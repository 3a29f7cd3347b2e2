// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pagechat - ask questions about any webpage.
//!
//! This is the binary entry point for the Pagechat API server.

use clap::{Parser, Subcommand};

mod serve;

/// Pagechat - ask questions about any webpage.
#[derive(Parser, Debug)]
#[command(name = "pagechat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Pagechat API server.
    Serve,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match pagechat_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            pagechat_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("pagechat: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("pagechat: failed to render config: {e}");
                std::process::exit(1);
            }
        },
    }
}

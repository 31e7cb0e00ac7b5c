//! Pull request labeler CLI
//!
//! Resolves labels for changed paths locally, or applies them to a GitHub
//! pull request.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter (default `info`, `debug` with `--verbose`)
//! - `MAX_LABELS_LIMIT`: overrides the label cap from the config
//! - `GITHUB_REPOSITORY`, `GITHUB_TOKEN`, `GITHUB_API_URL`: defaults for `apply`

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::ApplyArgs;
use error::{CliError, Result};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command).await
}

async fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            config,
            base,
            max_labels,
            json,
            paths,
        } => commands::run_resolve(&config, &base, max_labels, json, paths),
        Commands::Apply {
            repository,
            pr,
            base,
            token,
            config_path,
            config_ref,
            api_url,
            max_labels,
            json,
        } => {
            commands::run_apply(ApplyArgs {
                repository,
                pr,
                base,
                token,
                config_path,
                config_ref,
                api_url,
                max_labels,
                json,
            })
            .await
        }
    }
}

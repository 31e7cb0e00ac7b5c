//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use labeler_github::DEFAULT_API_URL;
use std::path::PathBuf;

/// Pull request labeler - map changed paths to labels
#[derive(Parser, Debug)]
#[command(name = "pr-labeler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve labels for a list of changed paths
    ///
    /// Paths are read from standard input, one per line, when none are given.
    ///
    /// Examples:
    ///   pr-labeler resolve -c .github/pr-labels.yml lib/fs.js doc/api/fs.md
    ///   git diff --name-only main | pr-labeler resolve -c labels.yml --base v14.x
    Resolve {
        /// Label config file (.yml, .yaml, .json or .toml)
        #[arg(short, long)]
        config: PathBuf,

        /// Base branch the pull request targets
        #[arg(short, long, default_value = "master")]
        base: String,

        /// Override the label cap from the config
        #[arg(long, env = "MAX_LABELS_LIMIT")]
        max_labels: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Changed paths, relative to the repository root
        paths: Vec<String>,
    },

    /// Resolve labels for a pull request and add them on GitHub
    ///
    /// The label config is fetched from the repository itself.
    Apply {
        /// Repository as owner/name
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repository: String,

        /// Pull request number
        #[arg(long)]
        pr: u64,

        /// Base branch the pull request targets
        #[arg(short, long)]
        base: String,

        /// GitHub token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Path of the label config inside the repository
        #[arg(long, default_value = ".github/pr-labels.yml")]
        config_path: String,

        /// Git ref to read the config from (default branch when omitted)
        #[arg(long)]
        config_ref: Option<String>,

        /// GitHub API root
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Override the label cap from the config
        #[arg(long, env = "MAX_LABELS_LIMIT")]
        max_labels: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

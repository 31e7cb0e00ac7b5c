//! Implementation of `pr-labeler apply`

use crate::commands::resolve::with_limit_override;
use crate::error::Result;
use colored::Colorize;
use labeler_github::{
    Applied, GitHubClient, LabelHost, PullRequestLabeler, PullRequestRef, RepoRef,
};
use labeler_rules::Config;

/// Settings for one `apply` run.
#[derive(Debug, Clone)]
pub struct ApplyArgs {
    pub repository: String,
    pub pr: u64,
    pub base: String,
    pub token: String,
    pub config_path: String,
    pub config_ref: Option<String>,
    pub api_url: String,
    pub max_labels: Option<usize>,
    pub json: bool,
}

/// Fetch the repository's label config, resolve labels for the pull request
/// and add them.
pub async fn run_apply(args: ApplyArgs) -> Result<()> {
    let repo: RepoRef = args.repository.parse()?;
    let pr = PullRequestRef::new(repo, args.pr);
    let client = GitHubClient::with_base_url(&args.token, &args.api_url)?;

    let raw = client
        .fetch_file(&pr.repo, &args.config_path, args.config_ref.as_deref())
        .await?;
    let config = Config::from_named_str(&args.config_path, &raw)?;
    let config = with_limit_override(config, args.max_labels)?;
    tracing::debug!(config = %args.config_path, "Loaded label config from repository");

    let labeler = PullRequestLabeler::new(client);
    let applied = labeler.resolve_then_update(&pr, &args.base, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&applied)?);
    } else {
        print_summary(&pr, &applied);
    }
    Ok(())
}

fn print_summary(pr: &PullRequestRef, applied: &Applied) {
    if applied.resolved.is_empty() {
        println!("{} No labels matched the changes in {}", "OK".green().bold(), pr);
        return;
    }

    println!("Resolved: {}", applied.resolved.to_string().cyan());
    if applied.applied {
        println!(
            "{} Added {} to {}",
            "OK".green().bold(),
            applied.submitted.join(", ").cyan(),
            pr
        );
    } else if applied.submitted.is_empty() {
        println!(
            "{} None of the resolved labels exist in {}",
            "SKIPPED".yellow().bold(),
            pr.repo
        );
    } else {
        println!("{} Could not add labels to {}", "FAILED".red().bold(), pr);
    }
}

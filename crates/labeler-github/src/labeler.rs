//! Apply resolved labels to a pull request

use crate::Result;
use crate::cache::LabelCache;
use crate::host::{LabelHost, PullRequestRef};
use crate::retry::RetryPolicy;
use labeler_rules::{Config, LabelSet};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument};

/// What happened when labeling one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    /// Labels produced by the rules.
    pub resolved: LabelSet,
    /// Labels sent to the host, after filtering to those the repository defines.
    pub submitted: Vec<String>,
    /// Whether the host accepted the write.
    pub applied: bool,
}

/// Repository labels matching a resolved label, ignoring case.
///
/// Order and casing come from `existing`, so labels are submitted exactly
/// as the repository spells them.
pub fn labels_in_common(existing: &[String], resolved: &LabelSet) -> Vec<String> {
    let wanted: HashSet<String> = resolved.iter().map(str::to_lowercase).collect();
    existing
        .iter()
        .filter(|label| wanted.contains(&label.to_lowercase()))
        .cloned()
        .collect()
}

/// Drives label resolution for pull requests against a [`LabelHost`].
#[derive(Debug)]
pub struct PullRequestLabeler<H> {
    host: H,
    retry: RetryPolicy,
    cache: LabelCache,
}

impl<H: LabelHost> PullRequestLabeler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            retry: RetryPolicy::default(),
            cache: LabelCache::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_cache(mut self, cache: LabelCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// List the pull request's files, resolve labels for them and apply.
    ///
    /// Only the file listing is fatal; it is retried per the [`RetryPolicy`].
    #[instrument(skip(self, config), fields(pr = %pr))]
    pub async fn resolve_then_update(
        &self,
        pr: &PullRequestRef,
        base_branch: &str,
        config: &Config,
    ) -> Result<Applied> {
        let files = self
            .retry
            .run("list changed files", || self.host.list_changed_files(pr))
            .await?;
        debug!(files = files.len(), "Fetched changed files");

        let resolved = labeler_rules::resolve(&files, base_branch, config);
        info!(labels = %resolved, "Resolved labels");

        Ok(self.fetch_existing_then_update(pr, resolved).await)
    }

    /// Filter `resolved` to labels the repository defines, then add them.
    ///
    /// Failing to list repository labels falls back to submitting `resolved`
    /// unfiltered. A failed write is logged and reported as not applied.
    #[instrument(skip(self, resolved), fields(pr = %pr))]
    pub async fn fetch_existing_then_update(
        &self,
        pr: &PullRequestRef,
        resolved: LabelSet,
    ) -> Applied {
        if resolved.is_empty() {
            debug!("No labels resolved, nothing to apply");
            return Applied {
                resolved,
                submitted: Vec::new(),
                applied: false,
            };
        }

        let submitted = match self
            .cache
            .get_or_fetch(&pr.repo, || self.host.list_repo_labels(&pr.repo))
            .await
        {
            Ok(existing) => labels_in_common(&existing, &resolved),
            Err(e) => {
                error!(error = %e, "Failed to list repository labels, submitting unfiltered");
                resolved.to_vec()
            }
        };

        if submitted.is_empty() {
            info!("None of the resolved labels exist in the repository");
            return Applied {
                resolved,
                submitted,
                applied: false,
            };
        }

        let applied = match self.host.add_labels(pr, &submitted).await {
            Ok(()) => {
                info!(labels = ?submitted, "Added labels");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to add labels");
                false
            }
        };

        Applied {
            resolved,
            submitted,
            applied,
        }
    }
}

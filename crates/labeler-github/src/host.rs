//! The remote side of labeling: where files are listed and labels applied

use crate::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// A repository on the label host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    /// Parse `owner/name`, the form of `GITHUB_REPOSITORY`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A pull request within a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PullRequestRef {
    pub repo: RepoRef,
    pub number: u64,
}

impl PullRequestRef {
    pub fn new(repo: RepoRef, number: u64) -> Self {
        Self { repo, number }
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

/// Operations the labeler needs from a code host.
#[async_trait]
pub trait LabelHost: Send + Sync {
    /// Paths touched by the pull request, in the order the host lists them.
    async fn list_changed_files(&self, pr: &PullRequestRef) -> Result<Vec<String>>;

    /// Names of every label defined on the repository, across all pages.
    async fn list_repo_labels(&self, repo: &RepoRef) -> Result<Vec<String>>;

    /// Add labels to the pull request. Never creates label definitions.
    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String]) -> Result<()>;

    /// Contents of a file in the repository at `git_ref` (default branch when `None`).
    async fn fetch_file(&self, repo: &RepoRef, path: &str, git_ref: Option<&str>)
    -> Result<String>;
}

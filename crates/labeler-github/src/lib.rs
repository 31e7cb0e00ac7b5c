//! Pull request labeling against GitHub
//!
//! Fetches a pull request's changed files, resolves labels for them with
//! [`labeler_rules`], keeps only the labels the repository already defines
//! and adds those to the pull request.
//!
//! The remote side is abstracted behind [`LabelHost`]; [`GitHubClient`] is the
//! REST implementation. [`PullRequestLabeler`] owns the retry policy for the
//! file listing and a short-lived cache of repository labels.

pub mod cache;
pub mod client;
pub mod error;
pub mod host;
pub mod labeler;
pub mod retry;

pub use cache::LabelCache;
pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::{Error, Result};
pub use host::{LabelHost, PullRequestRef, RepoRef};
pub use labeler::{Applied, PullRequestLabeler, labels_in_common};
pub use retry::RetryPolicy;

//! Time-bounded cache of repository label definitions

use crate::Result;
use crate::host::RepoRef;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Default time a fetched label list stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct Entry {
    fetched_at: Instant,
    labels: Arc<Vec<String>>,
}

/// Per-repository label lists, refetched once older than the TTL.
///
/// The lock is held across a fetch, so concurrent callers for a cold
/// repository wait for one request instead of issuing their own.
#[derive(Debug)]
pub struct LabelCache {
    ttl: Duration,
    entries: Mutex<HashMap<RepoRef, Entry>>,
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl LabelCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached labels for `repo`, calling `fetch` when absent or stale.
    ///
    /// A failed fetch leaves any stale entry in place and is returned to the caller.
    pub async fn get_or_fetch<F, Fut>(&self, repo: &RepoRef, fetch: F) -> Result<Arc<Vec<String>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>>>,
    {
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(repo)
            && entry.fetched_at.elapsed() < self.ttl
        {
            debug!(repo = %repo, "Label cache hit");
            return Ok(Arc::clone(&entry.labels));
        }

        debug!(repo = %repo, "Label cache miss");
        let labels = Arc::new(fetch().await?);
        entries.insert(
            repo.clone(),
            Entry {
                fetched_at: Instant::now(),
                labels: Arc::clone(&labels),
            },
        );
        Ok(labels)
    }

    /// Drop the entry for `repo`, forcing the next lookup to fetch.
    pub async fn invalidate(&self, repo: &RepoRef) {
        self.entries.lock().await.remove(repo);
    }
}

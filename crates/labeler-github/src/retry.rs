//! Fixed-delay retry for remote calls

use crate::{Error, Result};
use backoff::backoff::Backoff;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// How many times to attempt an operation and how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            interval: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            interval,
        }
    }

    /// Run `operation` until it succeeds or the attempts are used up.
    ///
    /// Every error is treated as transient. On exhaustion the last error is
    /// returned wrapped in [`Error::RetriesExhausted`].
    pub async fn run<T, F, Fut>(&self, operation: &str, mut f: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempts = 0u32;
        let result = backoff::future::retry_notify(
            FixedAttempts::new(*self),
            || {
                attempts += 1;
                let call = f();
                async move { call.await.map_err(backoff::Error::transient) }
            },
            |error: Error, wait: Duration| {
                warn!(operation, %error, ?wait, "Attempt failed, retrying");
            },
        )
        .await;

        result.map_err(|source| Error::RetriesExhausted {
            operation: operation.to_string(),
            attempts,
            source: Box::new(source),
        })
    }
}

/// Constant interval, bounded number of retries.
#[derive(Debug, Clone)]
struct FixedAttempts {
    policy: RetryPolicy,
    retries_left: u32,
}

impl FixedAttempts {
    fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            retries_left: policy.attempts.saturating_sub(1),
        }
    }
}

impl Backoff for FixedAttempts {
    fn reset(&mut self) {
        self.retries_left = self.policy.attempts.saturating_sub(1);
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.retries_left == 0 {
            return None;
        }
        self.retries_left -= 1;
        Some(self.policy.interval)
    }
}

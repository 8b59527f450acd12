// gitgang-core/src/moderation/retry.rs
//! Timeout + backoff retry policy for flaky remote calls.
//!
//! Attempts are strictly sequential: attempt N+1 starts only after attempt N
//! failed or timed out and the delay for N elapsed. The policy is generic over
//! the operation so it can be exercised without a network.

use log::{info, warn};
use std::fmt::{Debug, Display};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time;

use crate::config::ModerationConfig;

/// Why the last attempt of a retry sequence failed.
#[derive(Error, Debug)]
pub enum AttemptFailure<E: Display + Debug> {
    #[error("attempt timed out after {0:?}")]
    TimedOut(Duration),
    #[error("{0}")]
    Failed(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    /// Delay after the Nth failed attempt is `delays[N - 1]`; the last entry repeats.
    pub delays: Vec<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ModerationConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &ModerationConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            attempt_timeout: config.timeout(),
            delays: config.retry_delays(),
        }
    }

    /// Backoff to wait after the given 1-based attempt failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let index = attempt.saturating_sub(1) as usize;
        self.delays
            .get(index)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Runs `operation` until it succeeds or the attempts are used up.
    ///
    /// `operation` receives the 1-based attempt number. Each attempt is bounded
    /// by `attempt_timeout`. Returns the failure of the final attempt.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, AttemptFailure<E>>
    where
        E: Display + Debug,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let failure = match time::timeout(self.attempt_timeout, operation(attempt)).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(e)) => AttemptFailure::Failed(e),
                Err(_) => AttemptFailure::TimedOut(self.attempt_timeout),
            };

            warn!("{} failed (attempt {}/{}): {}", label, attempt, max_attempts, failure);
            if attempt >= max_attempts {
                return Err(failure);
            }

            let delay = self.delay_after(attempt);
            info!("Retrying {} in {}ms...", label, delay.as_millis());
            time::sleep(delay).await;
            attempt += 1;
        }
    }
}

//! Bounded exponential backoff for transient dispatch failures

use std::future::Future;
use std::time::Duration;

use leadflow_domain::DispatchConfig;
use tracing::{debug, warn};

use super::ports::DispatchError;

/// Retry schedule: up to `max_attempts` tries, the delay doubling from
/// `base_delay` on each retry and capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryConfig {
    /// Delay inserted after the failure of the given zero-based attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl From<&DispatchConfig> for RetryConfig {
    fn from(config: &DispatchConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

/// Result of a successful retried operation, with the schedule that was
/// actually slept so callers can account for it.
#[derive(Debug)]
pub struct RetryOutcome<T> {
    pub value: T,
    pub attempts: u32,
    pub delays: Vec<Duration>,
}

/// Run an operation, retrying transient dispatch failures on the configured
/// schedule.
///
/// Non-transient failures and the final exhausted transient failure are
/// returned to the caller unchanged.
pub async fn retry_transient<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<RetryOutcome<T>, DispatchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DispatchError>>,
{
    let mut delays = Vec::new();
    let mut attempt = 0_u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempts = attempt + 1, "delivery succeeded after retries");
                }
                return Ok(RetryOutcome { value, attempts: attempt + 1, delays });
            }
            Err(err) if err.is_transient() && attempt + 1 < config.max_attempts => {
                let delay = config.delay_for(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient delivery failure, retrying"
                );
                tokio::time::sleep(delay).await;
                delays.push(delay);
                attempt += 1;
            }
            Err(err) => {
                warn!(attempts = attempt + 1, error = %err, "delivery failed");
                return Err(err);
            }
        }
    }
}

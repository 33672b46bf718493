//! Notification dispatcher

use std::sync::Arc;
use std::time::Duration;

use leadflow_domain::{DispatchConfig, NotificationJob};
use tracing::{debug, instrument};

use super::ports::{Ack, DispatchError, NotificationChannel};
use super::retry::{retry_transient, RetryConfig};

/// Result of a completed dispatch, including the retry schedule that was
/// needed to get the message out.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub ack: Ack,
    pub attempts: u32,
    pub delays: Vec<Duration>,
}

/// Sends notification jobs through the external channel, retrying transient
/// failures with exponential backoff.
///
/// Failures are per-job: an exhausted or permanent failure is returned to
/// the caller and never aborts sibling jobs.
pub struct Dispatcher {
    channel: Arc<dyn NotificationChannel>,
    retry: RetryConfig,
}

impl Dispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>, config: &DispatchConfig) -> Self {
        Self { channel, retry: RetryConfig::from(config) }
    }

    /// Deliver one job.
    ///
    /// # Errors
    /// Returns the final `DispatchError` when the channel rejects the job
    /// permanently or the retry budget is exhausted.
    #[instrument(skip(self, job), fields(recipient = %job.recipient, subject = %job.subject))]
    pub async fn send(&self, job: &NotificationJob) -> Result<DispatchOutcome, DispatchError> {
        let outcome = retry_transient(&self.retry, || self.channel.deliver(job)).await?;

        debug!(
            message_id = %outcome.value.message_id,
            attempts = outcome.attempts,
            "notification delivered"
        );

        Ok(DispatchOutcome {
            ack: outcome.value,
            attempts: outcome.attempts,
            delays: outcome.delays,
        })
    }
}

//! Notification channel port and dispatch error classification

use async_trait::async_trait;
use leadflow_domain::{LeadflowError, NotificationJob};
use thiserror::Error;

/// Delivery receipt from the external channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// Channel-assigned message identifier.
    pub message_id: String,
}

/// Dispatch failures, classified for retry.
///
/// Rate-limit, server, and network failures are transient and retried with
/// backoff; a malformed recipient or rejected payload fails immediately.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Payload rejected: {0}")]
    Rejected(String),
}

impl DispatchError {
    /// Whether this failure class should be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Server(_) | Self::Network(_))
    }
}

impl From<DispatchError> for LeadflowError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::RateLimited(msg)
            | DispatchError::Server(msg)
            | DispatchError::Network(msg) => Self::Network(msg),
            DispatchError::InvalidRecipient(msg) | DispatchError::Rejected(msg) => {
                Self::InvalidInput(msg)
            }
        }
    }
}

/// External channel through which notifications leave the system.
///
/// The channel is assumed to deliver at-least-once; the core does not
/// deduplicate retried sends.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn deliver(&self, job: &NotificationJob) -> Result<Ack, DispatchError>;
}

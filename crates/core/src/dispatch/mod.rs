//! Outbound notification dispatch with bounded retry

pub mod ports;
pub mod retry;
pub mod service;
pub mod templates;

pub use ports::{Ack, DispatchError, NotificationChannel};
pub use service::{DispatchOutcome, Dispatcher};

//! # Leadflow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Field extraction from raw inbound messages
//! - Appointment slot allocation against a calendar port
//! - Outbound dispatch with bounded retry
//! - The intake orchestration tying the pipeline together
//! - Port/adapter interfaces (traits) for all external collaborators
//!
//! ## Architecture Principles
//! - Only depends on `leadflow-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod dispatch;
pub mod extraction;
pub mod intake;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use dispatch::ports::{Ack, DispatchError, NotificationChannel};
pub use dispatch::retry::{RetryConfig, RetryOutcome};
pub use dispatch::{templates, DispatchOutcome, Dispatcher};
pub use extraction::FieldExtractor;
pub use intake::assignment::{AssignmentPolicy, RoundRobinPolicy, SeededRandomPolicy};
pub use intake::filter::ExclusionFilter;
pub use intake::ports::{DocumentVault, Mailbox, ProspectStore};
pub use intake::IntakeService;
pub use scheduling::ports::CalendarPort;
pub use scheduling::SlotAllocator;

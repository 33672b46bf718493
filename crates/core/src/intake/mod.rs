//! Intake orchestration

pub mod assignment;
pub mod filter;
pub mod ports;
pub mod service;

pub use assignment::{AssignmentPolicy, RoundRobinPolicy, SeededRandomPolicy};
pub use filter::ExclusionFilter;
pub use ports::{DocumentVault, Mailbox, ProspectStore};
pub use service::IntakeService;

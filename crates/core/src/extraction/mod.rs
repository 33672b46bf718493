//! Field extraction from raw message bodies

pub mod patterns;
pub mod service;

pub use service::FieldExtractor;

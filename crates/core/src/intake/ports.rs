//! Port interfaces for the intake pipeline
//!
//! These traits define the boundaries between the orchestration logic and
//! the external collaborators (mailbox, record store, document vault).

use async_trait::async_trait;
use leadflow_domain::{InboundItem, ProspectRecord, RecordId, Result};

/// External mailbox holding the raw inbound items.
#[async_trait]
pub trait Mailbox: Send + Sync {
    /// List the items awaiting processing, in mailbox order.
    async fn list_unprocessed(&self) -> Result<Vec<InboundItem>>;

    /// Tag an item as handled so it is not listed again.
    async fn mark_handled(&self, id: &str, label: &str) -> Result<()>;
}

/// Append-only prospect record repository.
///
/// Single-writer per run; concurrent runs against the same store must be
/// serialized externally.
#[async_trait]
pub trait ProspectStore: Send + Sync {
    /// Append a record, returning its store-assigned id. Append order is
    /// preserved; records are never reordered or removed.
    async fn append(&self, record: &ProspectRecord) -> Result<RecordId>;

    /// Flip a record to processed. Idempotent: returns `true` on the first
    /// transition, `false` when the record was already processed.
    async fn mark_processed(&self, id: RecordId) -> Result<bool>;

    /// All records in append order.
    async fn all(&self) -> Result<Vec<(RecordId, ProspectRecord)>>;

    /// Records still awaiting the scheduling pipeline, in append order.
    async fn unprocessed(&self) -> Result<Vec<(RecordId, ProspectRecord)>>;
}

/// External document storage where each prospect gets a folder.
#[async_trait]
pub trait DocumentVault: Send + Sync {
    /// Create a named folder, returning its identifier.
    async fn create_folder(&self, name: &str) -> Result<String>;
}

//! Intake orchestration - core business logic
//!
//! One `run` processes a bounded batch of inbound items sequentially:
//! filter, extract, persist, then schedule and notify per record. Failures
//! after the durable append are isolated per item; only record-store
//! failures abort the run.

use std::sync::Arc;

use leadflow_domain::{
    parse_windows, Collaborator, Config, IntakeConfig, LeadflowError, ProspectRecord, RecordId,
    Result, RunSummary,
};
use tracing::{debug, info, instrument, warn};

use super::assignment::AssignmentPolicy;
use super::filter::ExclusionFilter;
use super::ports::{DocumentVault, Mailbox, ProspectStore};
use crate::dispatch::ports::NotificationChannel;
use crate::dispatch::{templates, Dispatcher};
use crate::extraction::FieldExtractor;
use crate::scheduling::ports::CalendarPort;
use crate::scheduling::SlotAllocator;

/// Ties the pipeline together: mailbox -> extraction -> store -> scheduling
/// -> dispatch.
pub struct IntakeService {
    mailbox: Arc<dyn Mailbox>,
    store: Arc<dyn ProspectStore>,
    calendar: Arc<dyn CalendarPort>,
    vault: Arc<dyn DocumentVault>,
    policy: Arc<dyn AssignmentPolicy>,
    dispatcher: Dispatcher,
    extractor: FieldExtractor,
    allocator: SlotAllocator,
    filter: ExclusionFilter,
    intake: IntakeConfig,
}

impl IntakeService {
    /// Wire the service from configuration and its collaborator ports.
    ///
    /// # Errors
    /// Returns `LeadflowError::Config` when the collaborator roster is empty
    /// or the scheduling configuration is invalid.
    pub fn new(
        config: &Config,
        mailbox: Arc<dyn Mailbox>,
        store: Arc<dyn ProspectStore>,
        calendar: Arc<dyn CalendarPort>,
        channel: Arc<dyn NotificationChannel>,
        vault: Arc<dyn DocumentVault>,
        policy: Arc<dyn AssignmentPolicy>,
    ) -> Result<Self> {
        if config.intake.collaborators.is_empty() {
            return Err(LeadflowError::Config("collaborator roster is empty".to_string()));
        }

        Ok(Self {
            mailbox,
            store,
            calendar,
            vault,
            policy,
            dispatcher: Dispatcher::new(channel, &config.dispatch),
            extractor: FieldExtractor::new(),
            allocator: SlotAllocator::new(config.scheduling.clone())?,
            filter: ExclusionFilter::new(&config.intake),
            intake: config.intake.clone(),
        })
    }

    /// Process one batch of inbound items.
    ///
    /// Items are handled in mailbox order; one item's pipeline completes
    /// before the next begins. A skipped item is left untouched for the
    /// mailbox owner; an accepted item is marked handled only after its
    /// record is durably appended.
    ///
    /// # Errors
    /// Returns an error when the mailbox cannot be listed or the record
    /// store fails; every other failure is counted in the summary.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunSummary> {
        let items = self.mailbox.list_unprocessed().await?;
        info!(count = items.len(), "processing inbound batch");

        let mut summary = RunSummary::default();

        for item in items {
            if self.filter.should_skip(&item) {
                debug!(item_id = %item.id, "skipping excluded item");
                summary.skipped += 1;
                continue;
            }

            let record = self.extractor.extract(&item.body);

            // Store failures are the one fatal condition of a run.
            let record_id = self.store.append(&record).await?;

            if let Err(err) =
                self.mailbox.mark_handled(&item.id, &self.intake.handled_label).await
            {
                warn!(item_id = %item.id, error = %err, "failed to mark inbound item handled");
                summary.failed += 1;
                continue;
            }

            match self.process_record(record_id, &record).await {
                Ok(()) => summary.accepted += 1,
                Err(LeadflowError::Database(msg)) => {
                    return Err(LeadflowError::Database(msg));
                }
                Err(err) => {
                    warn!(item_id = %item.id, record_id, error = %err, "record pipeline failed");
                    summary.failed += 1;
                }
            }
        }

        info!(
            accepted = summary.accepted,
            skipped = summary.skipped,
            failed = summary.failed,
            "intake run complete"
        );
        Ok(summary)
    }

    /// Send the post-call follow-up for a record.
    ///
    /// Invoked by outer plumbing once the call has taken place; `run` does
    /// not sequence it.
    pub async fn send_thank_you(
        &self,
        record: &ProspectRecord,
        collab: &Collaborator,
    ) -> Result<()> {
        let job = templates::thank_you(collab, record);
        self.dispatcher.send(&job).await.map_err(LeadflowError::from)?;
        Ok(())
    }

    /// Run the scheduling-and-notification half of the pipeline, then mark
    /// the record processed regardless of its outcome.
    async fn process_record(&self, id: RecordId, record: &ProspectRecord) -> Result<()> {
        let outcome = self.schedule_and_notify(record).await;

        match &outcome {
            Ok(()) => debug!(record_id = id, "record pipeline complete"),
            Err(err) => warn!(record_id = id, error = %err, "record left without appointment"),
        }

        self.store.mark_processed(id).await?;
        outcome
    }

    async fn schedule_and_notify(&self, record: &ProspectRecord) -> Result<()> {
        let collab = self
            .policy
            .pick(&self.intake.collaborators)
            .ok_or_else(|| LeadflowError::Config("collaborator roster is empty".to_string()))?
            .clone();

        let request = templates::document_request(&collab, record);
        self.dispatcher.send(&request).await.map_err(LeadflowError::from)?;

        // The prospect folder is convenience, not pipeline state.
        let folder = format!("{} - Documents", record.full_name());
        if let Err(err) = self.vault.create_folder(&folder).await {
            warn!(folder = %folder, error = %err, "failed to create prospect folder");
        }

        let windows = parse_windows(&record.available_windows);
        let from_day = self.allocator.next_day();
        let slot = self.allocator.find_slot(&windows, self.calendar.as_ref(), from_day).await?;

        let Some(slot) = slot else {
            return Err(LeadflowError::NotFound(
                "no free appointment slot within search bounds".to_string(),
            ));
        };

        let summary = format!("RDV avec {}", record.full_name());
        let description = format!("Email: {}", record.email);
        let attendees = vec![record.email.clone(), collab.email.clone()];
        let event = self.calendar.create_event(&summary, &description, &slot, &attendees).await?;
        debug!(event = %event.0, start = %slot.start, "appointment created");

        for recipient in [record.email.as_str(), collab.email.as_str()] {
            let confirmation = templates::appointment_confirmation(&collab, record, &slot, recipient);
            self.dispatcher.send(&confirmation).await.map_err(LeadflowError::from)?;
        }

        Ok(())
    }
}

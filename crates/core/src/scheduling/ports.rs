//! Port interfaces for the external calendar collaborator

use async_trait::async_trait;
use chrono::NaiveDateTime;
use leadflow_domain::{AppointmentSlot, EventRef, Result};

/// Conflict oracle and event sink backed by the external calendar.
///
/// Injected into the allocator so slot-search logic stays independently
/// testable with a fake.
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// Whether the interval is free of existing events.
    async fn is_free(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<bool>;

    /// Create a calendar event for the chosen slot.
    async fn create_event(
        &self,
        summary: &str,
        description: &str,
        slot: &AppointmentSlot,
        attendees: &[String],
    ) -> Result<EventRef>;
}

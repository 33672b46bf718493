//! Inbound item exclusion
//!
//! Calendar confirmations and other system-generated mail arrive in the
//! same mailbox as prospect messages; treating them as prospects would feed
//! junk records into the pipeline. Items matching this policy are skipped
//! before extraction and left untouched for the mailbox owner.

use leadflow_domain::{InboundItem, IntakeConfig};

/// Subject/sender exclusion policy.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    subject_terms: Vec<String>,
    internal_domains: Vec<String>,
}

impl ExclusionFilter {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            subject_terms: config
                .excluded_subject_terms
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            internal_domains: config.internal_domains.iter().map(|d| d.to_lowercase()).collect(),
        }
    }

    /// Whether the item should be skipped before extraction.
    pub fn should_skip(&self, item: &InboundItem) -> bool {
        let subject = item.subject.to_lowercase();
        let sender = item.sender.to_lowercase();

        self.subject_terms.iter().any(|term| subject.contains(term))
            || self.internal_domains.iter().any(|domain| sender.contains(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sender: &str, subject: &str) -> InboundItem {
        InboundItem {
            id: "item-1".to_string(),
            sender: sender.to_string(),
            subject: subject.to_string(),
            body: String::new(),
            unread: true,
        }
    }

    fn filter() -> ExclusionFilter {
        ExclusionFilter::new(&IntakeConfig::default())
    }

    #[test]
    fn skips_calendar_confirmations_by_subject() {
        assert!(filter().should_skip(&item("someone@x.com", "Confirmation de rendez-vous")));
        assert!(filter().should_skip(&item("someone@x.com", "Invitation : réunion")));
    }

    #[test]
    fn skips_internal_domain_senders() {
        assert!(filter().should_skip(&item(
            "noreply@calendar.google.com",
            "Nouveau prospect – Léa Martin"
        )));
    }

    #[test]
    fn keeps_prospect_messages() {
        assert!(!filter().should_skip(&item("contact@agency.example", "Nouveau prospect – Paul")));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(filter().should_skip(&item("x@y.com", "CONFIRMATION")));
        assert!(filter().should_skip(&item("noreply@CALENDAR.GOOGLE.COM", "hello")));
    }
}

//! Total field extraction over arbitrary message text

use chrono::Utc;
use leadflow_domain::ProspectRecord;
use tracing::debug;

use super::patterns::FIELD_PATTERNS;

/// Parses raw message bodies into structured prospect records.
///
/// Extraction is total: every configured field is present in the result,
/// empty when its pattern did not match. A pattern miss is data, never an
/// error, so this type has no failure mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a prospect record from the given text, stamping the intake
    /// time at call time.
    pub fn extract(&self, text: &str) -> ProspectRecord {
        let mut record = ProspectRecord::new(Utc::now());
        let mut matched = 0_usize;

        for pattern in FIELD_PATTERNS.iter() {
            if let Some(value) = pattern
                .regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
            {
                *(pattern.field)(&mut record) = value;
                matched += 1;
            }
        }

        debug!(matched, total = FIELD_PATTERNS.len(), "extracted prospect fields");
        record
    }
}

#[cfg(test)]
mod tests {
    use leadflow_domain::RecordStatus;

    use super::*;

    const SAMPLE: &str = "\
Prénom : Léa
Nom : Martin
Email : lea.martin@example.com
Téléphone : 0612345678
Adresse : 12 rue Exemple
Ville : Châtillon
Code postal : 92320
Département : 92
Bien recherché : Un appartement
Budget d'achat : 450000
A un dossier de financement : Oui
Délai d'achat : 3 mois
Secteurs de recherche : 92
Est intéressé par du programme neuf : Non
Jours disponibles : Lundi, Mardi
Plages horaires : 9:00-9:30,14:00-14:30
";

    #[test]
    fn extracts_full_template() {
        let record = FieldExtractor::new().extract(SAMPLE);
        assert_eq!(record.first_name, "Léa");
        assert_eq!(record.last_name, "Martin");
        assert_eq!(record.email, "lea.martin@example.com");
        assert_eq!(record.phone, "0612345678");
        assert_eq!(record.city, "Châtillon");
        assert_eq!(record.postal_code, "92320");
        assert_eq!(record.budget, "450000");
        assert_eq!(record.available_days, "Lundi, Mardi");
        assert_eq!(record.available_windows, "9:00-9:30,14:00-14:30");
        assert_eq!(record.status, RecordStatus::Pending);
    }

    #[test]
    fn partial_message_leaves_missing_fields_empty() {
        let text = "Prénom: Jean\nNom: Dupont\nEmail: jean@x.com";
        let record = FieldExtractor::new().extract(text);
        assert_eq!(record.first_name, "Jean");
        assert_eq!(record.last_name, "Dupont");
        assert_eq!(record.email, "jean@x.com");
        assert!(record.phone.is_empty());
        assert!(record.city.is_empty());
        assert!(record.available_windows.is_empty());
    }

    #[test]
    fn never_fails_on_degenerate_input() {
        let extractor = FieldExtractor::new();
        for text in ["", "   ", "no labels here at all", "Prénom", ":::::", "\n\n\n"] {
            let record = extractor.extract(text);
            assert!(record.first_name.is_empty());
            assert!(record.last_name.is_empty());
        }
    }

    #[test]
    fn extraction_is_idempotent_modulo_timestamp() {
        let extractor = FieldExtractor::new();
        let first = extractor.extract(SAMPLE);
        let mut second = extractor.extract(SAMPLE);
        second.received_at = first.received_at;
        assert_eq!(first, second);
    }

    #[test]
    fn announcement_lines_do_not_pollute_contact_fields() {
        let text = "\
Titre du bien : RARE – 3P SUR JARDIN
Ville du bien : Châtillon
Prix du bien : 535000
Prénom : Paul
Nom : Morel
Ville : Paris
";
        let record = FieldExtractor::new().extract(text);
        assert_eq!(record.first_name, "Paul");
        assert_eq!(record.last_name, "Morel");
        assert_eq!(record.city, "Paris");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let record = FieldExtractor::new().extract("PRÉNOM : Jean\nemail : jean@x.com");
        assert_eq!(record.first_name, "Jean");
        assert_eq!(record.email, "jean@x.com");
    }

    #[test]
    fn timestamp_is_stamped_at_call_time() {
        let before = Utc::now();
        let record = FieldExtractor::new().extract("");
        let after = Utc::now();
        assert!(record.received_at >= before && record.received_at <= after);
    }
}

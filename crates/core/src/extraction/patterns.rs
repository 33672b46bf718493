//! Labeled field patterns for prospect messages
//!
//! The inbound messages are generated from a fixed template, so extraction
//! is an ordered table of labeled line patterns rather than free-form
//! parsing. Each pattern is line-anchored and requires the `:`/`=` separator
//! directly after the label: without that, `Ville` would capture the
//! listing's `Ville du bien` line and `Nom` would fire inside `Prénom`.

use leadflow_domain::ProspectRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// One labeled pattern and the record field it feeds.
pub struct FieldPattern {
    pub label: &'static str,
    pub regex: Regex,
    pub field: fn(&mut ProspectRecord) -> &mut String,
}

fn labeled(label: &'static str, field: fn(&mut ProspectRecord) -> &mut String) -> FieldPattern {
    let pattern = format!(r"(?mi)^\s*{}\s*[:=]\s*(.*)$", regex::escape(label));
    FieldPattern {
        label,
        regex: Regex::new(&pattern).expect("field pattern must compile"),
        field,
    }
}

/// Extraction table, in template order.
pub static FIELD_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        labeled("Prénom", |r| &mut r.first_name),
        labeled("Nom", |r| &mut r.last_name),
        labeled("Email", |r| &mut r.email),
        labeled("Téléphone", |r| &mut r.phone),
        labeled("Adresse", |r| &mut r.address),
        labeled("Ville", |r| &mut r.city),
        labeled("Code postal", |r| &mut r.postal_code),
        labeled("Département", |r| &mut r.department),
        labeled("Bien recherché", |r| &mut r.property_type),
        labeled("Budget d'achat", |r| &mut r.budget),
        labeled("A un dossier de financement", |r| &mut r.financing),
        labeled("Délai d'achat", |r| &mut r.timeframe),
        labeled("Secteurs de recherche", |r| &mut r.sectors),
        labeled("Est intéressé par du programme neuf", |r| &mut r.new_build_interest),
        labeled("Jours disponibles", |r| &mut r.available_days),
        labeled("Plages horaires", |r| &mut r.available_windows),
    ]
});

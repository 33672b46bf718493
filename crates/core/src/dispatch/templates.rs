//! Outbound message templates
//!
//! Bodies are built in French, matching the agency's existing
//! correspondence. A prospect with no extracted first name is greeted as
//! "Client".

use leadflow_domain::{AppointmentSlot, Collaborator, NotificationJob, ProspectRecord};

fn greeting_name(record: &ProspectRecord) -> &str {
    if record.first_name.is_empty() { "Client" } else { &record.first_name }
}

/// Document checklist sent to the prospect right after intake.
pub fn document_request(collab: &Collaborator, record: &ProspectRecord) -> NotificationJob {
    let body = format!(
        "Bonjour {prenom},\n\n\
         Merci encore pour le temps accordé lors de notre échange téléphonique.\n\
         Comme convenu, je t'envoie la liste des documents nécessaires pour réaliser \
         l'analyse gratuite de ta capacité d'achat.\n\n\
         Documents à transmettre :\n\
         - Pièce d'identité (recto/verso)\n\
         - Justificatif de domicile de moins de 3 mois\n\
         - 3 dernières fiches de paie\n\
         - 3 derniers relevés de compte bancaire\n\
         - 2 derniers avis d'imposition\n\
         - Contrat de travail\n\
         - Attestations d'épargne (livrets, assurance-vie, etc.)\n\n\
         Prochaine étape :\n\
         Une fois les documents reçus, je procède à ton analyse et je te recontacte \
         pour un échange d'environ 30 minutes.\n\n\
         À très vite,\n\
         {collab_name}",
        prenom = greeting_name(record),
        collab_name = collab.full_name(),
    );

    NotificationJob {
        sender: collab.email.clone(),
        recipient: record.email.clone(),
        subject: "Documents nécessaires pour ton analyse patrimoniale".to_string(),
        body,
    }
}

/// Appointment notice sent to both the prospect and the collaborator.
pub fn appointment_confirmation(
    collab: &Collaborator,
    record: &ProspectRecord,
    slot: &AppointmentSlot,
    recipient: &str,
) -> NotificationJob {
    let client_name = record.full_name();
    let duration_min = (slot.end - slot.start).num_minutes();
    let body = format!(
        "Bonjour,\n\n\
         Un appel est programmé avec {client_name} ({email}) le {date}.\n\
         Durée : {duration_min} minutes.",
        email = record.email,
        date = slot.start.format("%d/%m/%Y à %H:%M"),
    );

    NotificationJob {
        sender: collab.email.clone(),
        recipient: recipient.to_string(),
        subject: format!("Rendez-vous téléphonique avec {client_name}"),
        body,
    }
}

/// Follow-up sent to the prospect after the call took place.
pub fn thank_you(collab: &Collaborator, record: &ProspectRecord) -> NotificationJob {
    let prenom = greeting_name(record);
    let body = format!(
        "Bonjour {prenom},\n\n\
         Merci pour votre échange avec {collab_name}.\n\
         Nous restons à votre disposition.",
        collab_name = collab.full_name(),
    );

    NotificationJob {
        sender: collab.email.clone(),
        recipient: record.email.clone(),
        subject: format!("Merci pour votre appel, {prenom}"),
        body,
    }
}

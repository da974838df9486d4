//! CRUD operations for [`Consultation`] records.

use chrono::Utc;
use passage_shared::constants::STATUS_PENDING;
use passage_shared::schema::InsertConsultation;
use tracing::debug;

use crate::memory::Collections;
use crate::models::Consultation;

impl Collections {
    pub fn create_consultation(&mut self, req: InsertConsultation) -> Consultation {
        let created_at = Utc::now();
        let created = self.consultations.insert_with(|id| Consultation {
            id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            nationality: req.nationality,
            program_interest: req.program_interest,
            preferred_date: req.preferred_date,
            preferred_time: req.preferred_time,
            budget_range: req.budget_range,
            message: req.message,
            status: STATUS_PENDING.to_string(),
            created_at,
        });
        debug!(id = created.id, "Consultation request stored");
        created
    }
}

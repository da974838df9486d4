//! CRUD operations for [`Contact`] records.

use chrono::Utc;
use passage_shared::constants::STATUS_PENDING;
use passage_shared::schema::InsertContact;
use tracing::debug;

use crate::memory::Collections;
use crate::models::Contact;

impl Collections {
    pub fn create_contact(&mut self, req: InsertContact) -> Contact {
        let created_at = Utc::now();
        let created = self.contacts.insert_with(|id| Contact {
            id,
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            program: req.program,
            message: req.message,
            status: STATUS_PENDING.to_string(),
            created_at,
        });
        debug!(id = created.id, "Contact message stored");
        created
    }
}

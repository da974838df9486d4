//! CRUD operations for [`FundraisingCampaign`] records.

use chrono::Utc;
use passage_shared::constants::STATUS_ACTIVE;
use passage_shared::schema::InsertFundraisingCampaign;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::memory::Collections;
use crate::models::{FundraisingCampaign, RecordId};

impl Collections {
    /// Insert a campaign with a zero balance.
    pub fn create_campaign(&mut self, req: InsertFundraisingCampaign) -> FundraisingCampaign {
        let created_at = Utc::now();
        let created = self.campaigns.insert_with(|id| FundraisingCampaign {
            id,
            name: req.name,
            program: req.program,
            story: req.story,
            current_amount: 0,
            target_amount: req.target_amount,
            currency: req.currency,
            days_left: req.days_left,
            status: STATUS_ACTIVE.to_string(),
            created_at,
        });
        debug!(id = created.id, "Fundraising campaign created");
        created
    }

    /// The balance campaign `id` would have after adding `delta`, or `None`
    /// when the campaign does not exist. Nothing is modified.
    pub fn credited_balance(&self, id: RecordId, delta: i64) -> Result<Option<i64>> {
        let Some(campaign) = self.campaigns.get_ref(id) else {
            return Ok(None);
        };
        campaign
            .current_amount
            .checked_add(delta)
            .map(Some)
            .ok_or(StoreError::AmountOverflow {
                campaign_id: id,
                delta,
            })
    }

    /// Add `delta` to the campaign's balance in place. A miss is a no-op, and
    /// an overflowing credit leaves the balance untouched.
    pub fn credit_campaign(
        &mut self,
        id: RecordId,
        delta: i64,
    ) -> Result<Option<FundraisingCampaign>> {
        let Some(balance) = self.credited_balance(id, delta)? else {
            return Ok(None);
        };
        let Some(campaign) = self.campaigns.get_mut(id) else {
            return Ok(None);
        };
        campaign.current_amount = balance;
        debug!(
            id,
            delta,
            current_amount = campaign.current_amount,
            "Campaign balance updated"
        );
        Ok(Some(campaign.clone()))
    }
}

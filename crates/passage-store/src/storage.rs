//! The storage interface the HTTP layer is written against.

use async_trait::async_trait;

use passage_shared::schema::{
    InsertConsultation, InsertContact, InsertContribution, InsertFundraisingCampaign, InsertUser,
};

use crate::error::Result;
use crate::models::{
    Consultation, Contact, Contribution, FundraisingCampaign, RecordId, TopContributor, User,
};

/// Create/read/list access to every collection.
///
/// Lookups that miss return `Ok(None)`. An `Err` means the backend itself
/// failed and is surfaced to clients as a generic server error.
#[async_trait]
pub trait Storage: Send + Sync {
    // -- Users --

    async fn create_user(&self, user: InsertUser) -> Result<User>;
    async fn get_user(&self, id: RecordId) -> Result<Option<User>>;
    /// First user with exactly this username, if any.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;

    // -- Consultations --

    async fn create_consultation(&self, consultation: InsertConsultation) -> Result<Consultation>;
    async fn get_consultation(&self, id: RecordId) -> Result<Option<Consultation>>;
    async fn list_consultations(&self) -> Result<Vec<Consultation>>;

    // -- Contacts --

    async fn create_contact(&self, contact: InsertContact) -> Result<Contact>;
    async fn get_contact(&self, id: RecordId) -> Result<Option<Contact>>;
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    // -- Fundraising campaigns --

    async fn create_campaign(
        &self,
        campaign: InsertFundraisingCampaign,
    ) -> Result<FundraisingCampaign>;
    async fn get_campaign(&self, id: RecordId) -> Result<Option<FundraisingCampaign>>;
    async fn list_campaigns(&self) -> Result<Vec<FundraisingCampaign>>;
    /// Add `delta` (any sign) to a campaign's `current_amount`. `None` when
    /// the campaign does not exist, in which case nothing changes.
    async fn update_campaign_amount(
        &self,
        id: RecordId,
        delta: i64,
    ) -> Result<Option<FundraisingCampaign>>;

    // -- Contributions --

    /// Store the contribution, then credit its campaign if it references
    /// one that exists. The contribution is kept either way.
    async fn create_contribution(&self, contribution: InsertContribution) -> Result<Contribution>;
    async fn get_contribution(&self, id: RecordId) -> Result<Option<Contribution>>;
    async fn list_contributions(&self) -> Result<Vec<Contribution>>;
    async fn get_contributions_by_campaign(
        &self,
        campaign_id: RecordId,
    ) -> Result<Vec<Contribution>>;
    /// Non-anonymous totals per contributor name, highest first.
    async fn get_top_contributors(&self) -> Result<Vec<TopContributor>>;
}

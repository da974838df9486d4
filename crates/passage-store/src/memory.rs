//! Process-memory backend.
//!
//! [`MemStorage`] owns one [`Table`] per entity behind a single
//! `tokio::sync::RwLock`. Reads share the lock; every mutation, including a
//! contribution together with its campaign credit, takes it exclusively.
//! The typed CRUD helpers live on [`Collections`] in the per-entity modules.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use passage_shared::schema::{
    InsertConsultation, InsertContact, InsertContribution, InsertFundraisingCampaign, InsertUser,
};

use crate::error::Result;
use crate::models::{
    Consultation, Contact, Contribution, FundraisingCampaign, RecordId, TopContributor, User,
};
use crate::seed::SEED_CAMPAIGNS;
use crate::storage::Storage;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Rows keyed by id with a private, never-reused id counter.
///
/// Ids are handed out in increasing order, so iterating the map yields
/// insertion order.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the row with it and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: RecordId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn get_ref(&self, id: RecordId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Every collection the store owns. Not shared outside [`MemStorage`].
#[derive(Debug, Default)]
pub struct Collections {
    pub(crate) users: Table<User>,
    pub(crate) consultations: Table<Consultation>,
    pub(crate) contacts: Table<Contact>,
    pub(crate) campaigns: Table<FundraisingCampaign>,
    pub(crate) contributions: Table<Contribution>,
}

impl Collections {
    /// Collections holding the seed campaigns and nothing else.
    pub fn seeded() -> Self {
        let mut collections = Self::default();
        for seed in SEED_CAMPAIGNS {
            collections.insert_seed_campaign(seed);
        }
        collections
    }
}

// ---------------------------------------------------------------------------
// MemStorage
// ---------------------------------------------------------------------------

/// In-memory [`Storage`] implementation.
#[derive(Debug)]
pub struct MemStorage {
    inner: RwLock<Collections>,
}

impl MemStorage {
    /// A store pre-populated with the showcase fundraising campaigns.
    pub fn new() -> Self {
        let collections = Collections::seeded();
        info!(
            campaigns = collections.campaigns.len(),
            "In-memory store initialized"
        );
        Self {
            inner: RwLock::new(collections),
        }
    }

    /// A store with no seed data at all.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, user: InsertUser) -> Result<User> {
        Ok(self.inner.write().await.create_user(user))
    }

    async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        Ok(self.inner.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.inner.read().await.find_user_by_username(username))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.list())
    }

    async fn create_consultation(&self, consultation: InsertConsultation) -> Result<Consultation> {
        Ok(self.inner.write().await.create_consultation(consultation))
    }

    async fn get_consultation(&self, id: RecordId) -> Result<Option<Consultation>> {
        Ok(self.inner.read().await.consultations.get(id))
    }

    async fn list_consultations(&self) -> Result<Vec<Consultation>> {
        Ok(self.inner.read().await.consultations.list())
    }

    async fn create_contact(&self, contact: InsertContact) -> Result<Contact> {
        Ok(self.inner.write().await.create_contact(contact))
    }

    async fn get_contact(&self, id: RecordId) -> Result<Option<Contact>> {
        Ok(self.inner.read().await.contacts.get(id))
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.inner.read().await.contacts.list())
    }

    async fn create_campaign(
        &self,
        campaign: InsertFundraisingCampaign,
    ) -> Result<FundraisingCampaign> {
        Ok(self.inner.write().await.create_campaign(campaign))
    }

    async fn get_campaign(&self, id: RecordId) -> Result<Option<FundraisingCampaign>> {
        Ok(self.inner.read().await.campaigns.get(id))
    }

    async fn list_campaigns(&self) -> Result<Vec<FundraisingCampaign>> {
        Ok(self.inner.read().await.campaigns.list())
    }

    async fn update_campaign_amount(
        &self,
        id: RecordId,
        delta: i64,
    ) -> Result<Option<FundraisingCampaign>> {
        self.inner.write().await.credit_campaign(id, delta)
    }

    async fn create_contribution(&self, contribution: InsertContribution) -> Result<Contribution> {
        self.inner.write().await.create_contribution(contribution)
    }

    async fn get_contribution(&self, id: RecordId) -> Result<Option<Contribution>> {
        Ok(self.inner.read().await.contributions.get(id))
    }

    async fn list_contributions(&self) -> Result<Vec<Contribution>> {
        Ok(self.inner.read().await.contributions.list())
    }

    async fn get_contributions_by_campaign(
        &self,
        campaign_id: RecordId,
    ) -> Result<Vec<Contribution>> {
        Ok(self.inner.read().await.contributions_for_campaign(campaign_id))
    }

    async fn get_top_contributors(&self) -> Result<Vec<TopContributor>> {
        Ok(self.inner.read().await.top_contributors())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::StoreError;

    fn consultation(first_name: &str) -> InsertConsultation {
        InsertConsultation {
            first_name: first_name.to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            phone: "+1555".to_string(),
            ..Default::default()
        }
    }

    fn contact(full_name: &str) -> InsertContact {
        InsertContact {
            full_name: full_name.to_string(),
            email: "jo@x.com".to_string(),
            phone: "+44".to_string(),
            message: "Call me".to_string(),
            ..Default::default()
        }
    }

    fn contribution(campaign_id: Option<RecordId>, amount: i64) -> InsertContribution {
        InsertContribution {
            campaign_id,
            contributor_name: "Sam".to_string(),
            contributor_email: "s@x.com".to_string(),
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_table_ids_start_at_one_and_increase() {
        let mut table: Table<RecordId> = Table::new();
        let ids: Vec<RecordId> = (0..4).map(|_| table.insert_with(|id| id)).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(table.list(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_fresh_store_holds_only_seed_campaigns() {
        let store = MemStorage::new();

        let campaigns = store.list_campaigns().await.unwrap();
        let ids: Vec<RecordId> = campaigns.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(store.list_users().await.unwrap().is_empty());
        assert!(store.list_consultations().await.unwrap().is_empty());
        assert!(store.list_contacts().await.unwrap().is_empty());
        assert!(store.list_contributions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_id_counters_are_independent_per_collection() {
        let store = MemStorage::new();

        for (i, name) in ["Ana", "Ben", "Cy"].into_iter().enumerate() {
            let created = store.create_consultation(consultation(name)).await.unwrap();
            assert_eq!(created.id, i as RecordId + 1);
        }

        let first_contact = store.create_contact(contact("Jo")).await.unwrap();
        assert_eq!(first_contact.id, 1);

        // Seeds consumed campaign ids 1..=3.
        let campaign = store
            .create_campaign(InsertFundraisingCampaign {
                name: "New".to_string(),
                program: "Study Permit".to_string(),
                story: "...".to_string(),
                target_amount: 1_000,
                currency: "CAD".to_string(),
                days_left: 10,
            })
            .await
            .unwrap();
        assert_eq!(campaign.id, 4);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemStorage::new();
        let created = store.create_consultation(consultation("Ana")).await.unwrap();
        let fetched = store.get_consultation(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        let created = store.create_contact(contact("Jo")).await.unwrap();
        assert_eq!(store.get_contact(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemStorage::new();
        assert_eq!(store.get_consultation(42).await.unwrap(), None);
        assert_eq!(store.get_campaign(999).await.unwrap(), None);
        assert_eq!(store.get_user(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_contribution_credits_campaign() {
        let store = MemStorage::new();
        let before = store.get_campaign(2).await.unwrap().unwrap().current_amount;

        store.create_contribution(contribution(Some(2), 5_000)).await.unwrap();
        store.create_contribution(contribution(Some(2), 250)).await.unwrap();

        let after = store.get_campaign(2).await.unwrap().unwrap().current_amount;
        assert_eq!(after, before + 5_250);
    }

    #[tokio::test]
    async fn test_dangling_contribution_is_stored_without_credit() {
        let store = MemStorage::new();
        let before = store.list_campaigns().await.unwrap();

        let stored = store
            .create_contribution(contribution(Some(999), 5_000))
            .await
            .unwrap();

        assert_eq!(store.get_contribution(stored.id).await.unwrap(), Some(stored.clone()));
        assert_eq!(
            store.get_contributions_by_campaign(999).await.unwrap(),
            vec![stored]
        );
        assert_eq!(store.list_campaigns().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_concurrent_contributions_do_not_lose_credit() {
        let store = Arc::new(MemStorage::new());
        let seed = store.get_campaign(1).await.unwrap().unwrap().current_amount;

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_contribution(contribution(Some(1), 10)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let campaign = store.get_campaign(1).await.unwrap().unwrap();
        assert_eq!(campaign.current_amount, seed + 500);
        assert_eq!(store.list_contributions().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_update_campaign_amount() {
        let store = MemStorage::new();

        let updated = store.update_campaign_amount(3, -1_000).await.unwrap().unwrap();
        assert_eq!(updated.current_amount, 27_000);
        assert_eq!(store.get_campaign(3).await.unwrap(), Some(updated));

        assert_eq!(store.update_campaign_amount(42, 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overflowing_contribution_writes_nothing() {
        let store = MemStorage::new();
        let before = store.get_campaign(2).await.unwrap();

        let result = store.create_contribution(contribution(Some(2), i64::MAX)).await;
        assert!(matches!(result, Err(StoreError::AmountOverflow { campaign_id: 2, .. })));

        assert_eq!(store.get_campaign(2).await.unwrap(), before);
        assert!(store.list_contributions().await.unwrap().is_empty());

        // The id was not consumed either.
        let next = store.create_contribution(contribution(Some(2), 1)).await.unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn test_users_through_trait() {
        let store = MemStorage::new();
        let alice = store
            .create_user(InsertUser {
                username: "alice".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(store.get_user(1).await.unwrap(), Some(alice.clone()));
        assert_eq!(
            store.get_user_by_username("alice").await.unwrap(),
            Some(alice)
        );
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_store_has_no_campaigns() {
        let store = MemStorage::empty();
        assert!(store.list_campaigns().await.unwrap().is_empty());
    }
}

//! CRUD operations for [`Contribution`] records, plus the leaderboard.

use std::collections::HashMap;

use chrono::Utc;
use passage_shared::constants::TOP_CONTRIBUTORS_LIMIT;
use passage_shared::schema::InsertContribution;
use tracing::debug;

use crate::error::Result;
use crate::memory::Collections;
use crate::models::{Contribution, RecordId, TopContributor};

impl Collections {
    /// Store a contribution and credit the campaign it points at.
    ///
    /// The campaign reference is soft: when it does not resolve, the
    /// contribution is still stored and no balance changes. A credit that
    /// would overflow the balance is rejected before anything is stored.
    pub fn create_contribution(&mut self, req: InsertContribution) -> Result<Contribution> {
        if let Some(campaign_id) = req.campaign_id {
            self.credited_balance(campaign_id, req.amount)?;
        }

        let created_at = Utc::now();
        let created = self.contributions.insert_with(|id| Contribution {
            id,
            campaign_id: req.campaign_id,
            contributor_name: req.contributor_name,
            contributor_email: req.contributor_email,
            amount: req.amount,
            message: req.message,
            anonymous: req.anonymous.unwrap_or(false),
            created_at,
        });

        if let Some(campaign_id) = created.campaign_id {
            if self.credit_campaign(campaign_id, created.amount)?.is_none() {
                debug!(
                    id = created.id,
                    campaign_id, "Contribution references unknown campaign"
                );
            }
        }

        debug!(id = created.id, amount = created.amount, "Contribution stored");
        Ok(created)
    }

    /// Contributions with exactly this `campaign_id`, in insertion order.
    pub fn contributions_for_campaign(&self, campaign_id: RecordId) -> Vec<Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.campaign_id == Some(campaign_id))
            .cloned()
            .collect()
    }

    /// Sum non-anonymous contributions per contributor name and return the
    /// largest totals. Names compare exactly; ties keep first-seen order.
    /// Totals saturate at the `i64` bounds.
    pub fn top_contributors(&self) -> Vec<TopContributor> {
        let mut totals: Vec<TopContributor> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for c in self.contributions.iter().filter(|c| !c.anonymous) {
            match index.get(c.contributor_name.as_str()) {
                Some(&i) => {
                    let total = &mut totals[i].total_amount;
                    *total = total.saturating_add(c.amount);
                }
                None => {
                    index.insert(c.contributor_name.as_str(), totals.len());
                    totals.push(TopContributor {
                        name: c.contributor_name.clone(),
                        total_amount: c.amount,
                    });
                }
            }
        }

        totals.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
        totals.truncate(TOP_CONTRIBUTORS_LIMIT);
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(
        campaign_id: Option<RecordId>,
        name: &str,
        amount: i64,
        anonymous: Option<bool>,
    ) -> InsertContribution {
        InsertContribution {
            campaign_id,
            contributor_name: name.to_string(),
            contributor_email: format!("{}@x.com", name.to_lowercase()),
            amount,
            message: None,
            anonymous,
        }
    }

    #[test]
    fn test_anonymous_defaults_to_false() {
        let mut c = Collections::default();
        let created = c.create_contribution(contribution(None, "Sam", 10, None)).unwrap();
        assert!(!created.anonymous);
    }

    #[test]
    fn test_balance_equals_seed_plus_contributions() {
        let mut c = Collections::seeded();
        let seed = c.campaigns.get(2).unwrap().current_amount;

        let amounts = [5_000, 120, 75, 1];
        for amount in amounts {
            c.create_contribution(contribution(Some(2), "Sam", amount, None)).unwrap();
        }
        // Other campaigns and campaign-less pledges do not count.
        c.create_contribution(contribution(Some(1), "Sam", 900, None)).unwrap();
        c.create_contribution(contribution(None, "Sam", 900, None)).unwrap();

        let applied: i64 = c
            .contributions_for_campaign(2)
            .iter()
            .map(|c| c.amount)
            .sum();
        assert_eq!(applied, amounts.iter().sum::<i64>());
        assert_eq!(c.campaigns.get(2).unwrap().current_amount, seed + applied);
    }

    #[test]
    fn test_filter_by_campaign_keeps_insertion_order() {
        let mut c = Collections::seeded();
        let a = c.create_contribution(contribution(Some(3), "A", 1, None)).unwrap();
        c.create_contribution(contribution(Some(1), "B", 2, None)).unwrap();
        let b = c.create_contribution(contribution(Some(3), "C", 3, None)).unwrap();

        assert_eq!(c.contributions_for_campaign(3), vec![a, b]);
        assert!(c.contributions_for_campaign(2).is_empty());
    }

    #[test]
    fn test_top_contributors_aggregates_and_sorts() {
        let mut c = Collections::default();
        c.create_contribution(contribution(None, "Sam", 100, None)).unwrap();
        c.create_contribution(contribution(None, "Ana", 300, Some(false))).unwrap();
        c.create_contribution(contribution(None, "Sam", 250, None)).unwrap();
        c.create_contribution(contribution(None, "sam", 1_000, None)).unwrap();

        let top = c.top_contributors();
        let rows: Vec<(&str, i64)> = top.iter().map(|t| (t.name.as_str(), t.total_amount)).collect();
        assert_eq!(rows, vec![("sam", 1_000), ("Sam", 350), ("Ana", 300)]);
    }

    #[test]
    fn test_top_contributors_excludes_anonymous() {
        let mut c = Collections::default();
        c.create_contribution(contribution(None, "Hidden", 10_000, Some(true))).unwrap();
        c.create_contribution(contribution(None, "Open", 5, None)).unwrap();

        let top = c.top_contributors();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Open");
    }

    #[test]
    fn test_top_contributors_capped_at_limit() {
        let mut c = Collections::default();
        for i in 0..15 {
            c.create_contribution(contribution(None, &format!("Donor{i}"), i * 10, None)).unwrap();
        }

        let top = c.top_contributors();
        assert_eq!(top.len(), TOP_CONTRIBUTORS_LIMIT);
        assert_eq!(top[0].name, "Donor14");
        assert!(top.windows(2).all(|w| w[0].total_amount >= w[1].total_amount));
    }

    #[test]
    fn test_top_contributors_ties_keep_first_seen_order() {
        let mut c = Collections::default();
        c.create_contribution(contribution(None, "First", 50, None)).unwrap();
        c.create_contribution(contribution(None, "Second", 50, None)).unwrap();

        let names: Vec<String> = c.top_contributors().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_top_contributors_total_saturates() {
        let mut c = Collections::default();
        c.create_contribution(contribution(Some(999), "Whale", i64::MAX, None)).unwrap();
        c.create_contribution(contribution(Some(999), "Whale", 1, None)).unwrap();
        c.create_contribution(contribution(None, "Minnow", 5, None)).unwrap();

        let top = c.top_contributors();
        let rows: Vec<(&str, i64)> = top.iter().map(|t| (t.name.as_str(), t.total_amount)).collect();
        assert_eq!(rows, vec![("Whale", i64::MAX), ("Minnow", 5)]);
    }

    #[test]
    fn test_overflowing_contribution_is_not_stored() {
        let mut c = Collections::seeded();
        let before = c.campaigns.get(2).unwrap();

        assert!(c
            .create_contribution(contribution(Some(2), "Big", i64::MAX, None))
            .is_err());
        assert!(c.contributions_for_campaign(2).is_empty());
        assert_eq!(c.campaigns.get(2).unwrap(), before);
    }
}

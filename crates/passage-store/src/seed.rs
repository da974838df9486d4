//! Showcase campaigns inserted on every startup.

use chrono::Utc;
use passage_shared::constants::STATUS_ACTIVE;

use crate::memory::Collections;
use crate::models::FundraisingCampaign;

/// Literal values for one seeded campaign. Unlike created campaigns, seeds
/// start with a non-zero balance that no contribution row accounts for.
#[derive(Debug, Clone, Copy)]
pub struct SeedCampaign {
    pub name: &'static str,
    pub program: &'static str,
    pub story: &'static str,
    pub current_amount: i64,
    pub target_amount: i64,
    pub currency: &'static str,
    pub days_left: i64,
}

pub const SEED_CAMPAIGNS: &[SeedCampaign] = &[
    SeedCampaign {
        name: "Maria Rodriguez",
        program: "EB-5 Investor Visa",
        story: "Maria has spent eight years building a small import business and \
                needs help closing the gap on her EB-5 investment so her family \
                can finally settle in the United States.",
        current_amount: 45_000,
        target_amount: 80_000,
        currency: "USD",
        days_left: 23,
    },
    SeedCampaign {
        name: "Ahmed Hassan",
        program: "Canada Express Entry",
        story: "Ahmed is a software engineer with a job offer in Toronto. His \
                community is helping cover settlement funds and relocation costs \
                for his wife and two children.",
        current_amount: 65_000,
        target_amount: 100_000,
        currency: "USD",
        days_left: 15,
    },
    SeedCampaign {
        name: "Li Wei",
        program: "Portugal Golden Visa",
        story: "Li is a retired teacher pooling support from former students to \
                fund a residency investment and start a language school in Porto.",
        current_amount: 28_000,
        target_amount: 50_000,
        currency: "USD",
        days_left: 31,
    },
];

impl Collections {
    pub(crate) fn insert_seed_campaign(&mut self, seed: &SeedCampaign) -> FundraisingCampaign {
        let created_at = Utc::now();
        self.campaigns.insert_with(|id| FundraisingCampaign {
            id,
            name: seed.name.to_string(),
            program: seed.program.to_string(),
            story: seed.story.to_string(),
            current_amount: seed.current_amount,
            target_amount: seed.target_amount,
            currency: seed.currency.to_string(),
            days_left: seed.days_left,
            status: STATUS_ACTIVE.to_string(),
            created_at,
        })
    }
}

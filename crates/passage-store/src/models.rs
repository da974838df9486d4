//! Persisted record shapes.
//!
//! Every struct serializes with camelCase field names so it can be handed
//! straight to the API layer. Optional fields the client left out are
//! emitted as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sequential per-collection identifier, starting at 1.
pub type RecordId = i64;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Account record reserved for the sign-in flow. `username` is meant to be
/// unique but the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    /// Opaque to the store.
    pub password: String,
}

// ---------------------------------------------------------------------------
// Consultation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: Option<String>,
    pub program_interest: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub budget_range: Option<String>,
    pub message: Option<String>,
    /// Always `"pending"`; no transition exists.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub program: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Fundraising campaign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundraisingCampaign {
    pub id: RecordId,
    pub name: String,
    pub program: String,
    pub story: String,
    /// Seed value (0 for created campaigns) plus every contribution applied
    /// since.
    pub current_amount: i64,
    pub target_amount: i64,
    pub currency: String,
    pub days_left: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Contribution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: RecordId,
    /// Soft reference to [`FundraisingCampaign::id`].
    pub campaign_id: Option<RecordId>,
    pub contributor_name: String,
    pub contributor_email: String,
    pub amount: i64,
    pub message: Option<String>,
    pub anonymous: bool,
    pub created_at: DateTime<Utc>,
}

/// One row of the contributors leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopContributor {
    pub name: String,
    pub total_amount: i64,
}

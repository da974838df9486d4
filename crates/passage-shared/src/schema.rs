//! Insert schemas: the subset of each record a client may submit.
//!
//! Every insert type is the full persisted shape minus the server-assigned
//! fields (`id`, `status`, `createdAt`, `currentAmount`). Each one declares
//! its fields in a static [`FieldSpec`] table, and [`validate`] checks an
//! inbound JSON body against that table before decoding it.
//!
//! Validation is shape-only: requiredness and primitive type. Unknown keys,
//! including server-assigned fields a client tries to set, are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldIssue, ValidationError};

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// JSON primitive a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One entry of an insert schema's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// An insertable payload type with a declarative field table.
pub trait InsertSchema: DeserializeOwned {
    /// Wire-level (camelCase) field names with their kind and requiredness.
    const FIELDS: &'static [FieldSpec];
}

/// Validate `body` against `T`'s field table and decode it.
///
/// All issues are collected before returning. `null` counts as absent, so
/// it is accepted for optional fields and reported as `Required` for
/// required ones.
pub fn validate<T: InsertSchema>(body: &Value) -> Result<T, ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::malformed(json_type_name(body)));
    };

    let mut issues = Vec::new();
    let mut accepted = Map::new();

    for spec in T::FIELDS {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    issues.push(FieldIssue::required(spec.name, spec.kind.name()));
                }
            }
            Some(value) if spec.kind.accepts(value) => {
                accepted.insert(spec.name.to_string(), value.clone());
            }
            Some(value) => {
                issues.push(FieldIssue::wrong_type(
                    spec.name,
                    spec.kind.name(),
                    json_type_name(value),
                ));
            }
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    serde_json::from_value(Value::Object(accepted))
        .map_err(|e| ValidationError::new(vec![FieldIssue::wrong_type("", "object", &e.to_string())]))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        // Integral but above i64::MAX.
        Value::Number(n) if n.is_u64() && !n.is_i64() => "integer (out of range)",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl InsertSchema for InsertUser {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("username", FieldKind::String),
        FieldSpec::required("password", FieldKind::String),
    ];
}

// ---------------------------------------------------------------------------
// Consultation
// ---------------------------------------------------------------------------

/// A consultation request submitted from the scheduler form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertConsultation {
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
}

impl InsertSchema for InsertConsultation {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("firstName", FieldKind::String),
        FieldSpec::required("lastName", FieldKind::String),
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("phone", FieldKind::String),
        FieldSpec::optional("nationality", FieldKind::String),
        FieldSpec::optional("programInterest", FieldKind::String),
        FieldSpec::optional("preferredDate", FieldKind::String),
        FieldSpec::optional("preferredTime", FieldKind::String),
        FieldSpec::optional("budgetRange", FieldKind::String),
        FieldSpec::optional("message", FieldKind::String),
    ];
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertContact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub program: Option<String>,
    pub message: String,
}

impl InsertSchema for InsertContact {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("fullName", FieldKind::String),
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("phone", FieldKind::String),
        FieldSpec::optional("program", FieldKind::String),
        FieldSpec::required("message", FieldKind::String),
    ];
}

// ---------------------------------------------------------------------------
// Fundraising campaign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertFundraisingCampaign {
    pub name: String,
    pub program: String,
    pub story: String,
    pub target_amount: i64,
    pub currency: String,
    pub days_left: i64,
}

impl InsertSchema for InsertFundraisingCampaign {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("program", FieldKind::String),
        FieldSpec::required("story", FieldKind::String),
        FieldSpec::required("targetAmount", FieldKind::Integer),
        FieldSpec::required("currency", FieldKind::String),
        FieldSpec::required("daysLeft", FieldKind::Integer),
    ];
}

// ---------------------------------------------------------------------------
// Contribution
// ---------------------------------------------------------------------------

/// A pledge towards a campaign. `campaign_id` is a soft reference: it is
/// never checked against the campaign collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsertContribution {
    pub campaign_id: Option<i64>,
    pub contributor_name: String,
    pub contributor_email: String,
    pub amount: i64,
    pub message: Option<String>,
    pub anonymous: Option<bool>,
}

impl InsertSchema for InsertContribution {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("campaignId", FieldKind::Integer),
        FieldSpec::required("contributorName", FieldKind::String),
        FieldSpec::required("contributorEmail", FieldKind::String),
        FieldSpec::required("amount", FieldKind::Integer),
        FieldSpec::optional("message", FieldKind::String),
        FieldSpec::optional("anonymous", FieldKind::Boolean),
    ];
}

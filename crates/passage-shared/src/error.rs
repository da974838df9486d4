use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found while validating an inbound payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Offending field name; empty when the payload itself is malformed.
    pub path: String,
    /// Primitive type the schema expects at this path.
    pub expected: String,
    /// What was actually found (`"missing"` when the field was absent).
    pub received: String,
    pub message: String,
}

impl FieldIssue {
    pub fn required(path: &str, expected: &str) -> Self {
        Self {
            path: path.to_string(),
            expected: expected.to_string(),
            received: "missing".to_string(),
            message: "Required".to_string(),
        }
    }

    pub fn wrong_type(path: &str, expected: &str, received: &str) -> Self {
        Self {
            path: path.to_string(),
            expected: expected.to_string(),
            received: received.to_string(),
            message: format!("Expected {expected}, received {received}"),
        }
    }
}

/// Payload failed shape validation against an insert schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Validation error for a payload that is not a JSON object at all.
    pub fn malformed(received: &str) -> Self {
        Self::new(vec![FieldIssue::wrong_type("", "object", received)])
    }
}

use serde::{Deserialize, Serialize};

use crate::error::FieldIssue;

/// Uniform JSON envelope wrapped around every API response.
///
/// Successful responses carry `data` (or a bare `message` for health
/// checks); failures carry `error` and, for validation failures, the
/// per-field `details`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldIssue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// A successful response with no payload, only a human-readable message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            details: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            details: None,
            message: None,
        }
    }

    pub fn with_details(mut self, details: Vec<FieldIssue>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_omits_error_fields() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn test_failure_envelope_with_details() {
        let resp = ApiResponse::failure("Invalid contact data")
            .with_details(vec![FieldIssue::required("email", "string")]);
        let json = serde_json::to_value(resp).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid contact data");
        assert_eq!(json["details"][0]["path"], "email");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_message_envelope() {
        let json = serde_json::to_value(ApiResponse::message("API is healthy")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "API is healthy" })
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::Issue;

pub const INVALID_INPUT: &str = "Invalid input data. Please check your form fields.";
pub const NOT_CONFIGURED: &str = "Email service is not configured.";
pub const DELIVERY_FAILED: &str = "Failed to send request. Please try again later.";
pub const UNEXPECTED: &str = "An unexpected error occurred.";

/// What the browser receives after submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Issue>>,
}

impl HandlerResult {
    /// Bare success, also what automated submissions are told.
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
            id: None,
            error: None,
            details: None,
        }
    }

    pub fn sent(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            id: Some(id.into()),
            ..Self::accepted()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::accepted()
        }
    }

    pub fn rejected(error: impl Into<String>, details: Vec<Issue>) -> Self {
        Self {
            details: Some(details),
            ..Self::failed(error)
        }
    }
}

/// Result of a submission that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Decoy field filled, nothing was sent.
    Discarded,
    Sent { message: &'static str, id: String },
}

impl From<Outcome> for HandlerResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Discarded => HandlerResult::accepted(),
            Outcome::Sent { message, id } => HandlerResult::sent(message, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_serializes_to_bare_success() {
        let json = serde_json::to_value(HandlerResult::accepted()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_rejected_carries_details() {
        let result = HandlerResult::rejected(
            "email: Invalid email address",
            vec![Issue {
                field: "email".to_string(),
                message: "Invalid email address".to_string(),
            }],
        );

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "email: Invalid email address",
                "details": [{ "field": "email", "message": "Invalid email address" }]
            })
        );
    }
}

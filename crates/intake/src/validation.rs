use std::{borrow::Cow, sync::LazyLock};

use lettre::Address;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::form::FieldSpec;

/// A single field-level validation failure reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").unwrap()
});

/// Submitter address rule. Needs a dotted domain with a top-level label, no
/// leading or doubled dots, and must be usable as a reply-to mailbox.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let valid = !email.starts_with('.')
        && !email.contains("..")
        && RE_EMAIL.is_match(email)
        && email.parse::<Address>().is_ok();

    if valid {
        return Ok(());
    }

    Err(ValidationError::new("email").with_message(Cow::from("Invalid email address")))
}

/// Flatten validator errors into issues, ordered as the form lists its fields.
pub(crate) fn collect_issues(errors: &ValidationErrors, fields: &[FieldSpec]) -> Vec<Issue> {
    let field_errors = errors.field_errors();
    let mut issues = vec![];

    for spec in fields {
        let errors = field_errors
            .iter()
            .find(|(key, _)| {
                let key: &str = key;
                key == spec.name || key == spec.ident
            })
            .map(|(_, errors)| *errors);

        for error in errors.into_iter().flatten() {
            issues.push(Issue {
                field: spec.name.to_owned(),
                message: describe(spec.label, error),
            });
        }
    }

    issues
}

/// `field: message` pairs joined into one human-readable line.
pub(crate) fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(label: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match &*error.code {
        "length" => {
            let len = error
                .params
                .get("value")
                .and_then(|value| value.as_str())
                .map(|value| value.chars().count() as u64)
                .unwrap_or_default();
            let min = error.params.get("min").and_then(|min| min.as_u64());

            match min {
                Some(min) if len < min && min <= 1 => format!("{label} is required"),
                Some(min) if len < min => format!("{label} must be at least {min} characters"),
                _ => format!("{label} is too long"),
            }
        }
        "email" => "Invalid email address".to_owned(),
        _ => "Invalid value".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("fullName", "full_name", "Full name"),
        FieldSpec::new("email", "email", "Email"),
        FieldSpec::new("message", "message", "Message"),
    ];

    fn length_error(value: &str, min: Option<u64>, max: Option<u64>) -> ValidationError {
        let mut error = ValidationError::new("length");
        error.add_param(Cow::from("value"), &value);
        if let Some(min) = min {
            error.add_param(Cow::from("min"), &min);
        }
        if let Some(max) = max {
            error.add_param(Cow::from("max"), &max);
        }
        error
    }

    #[test]
    fn test_issues_follow_field_order_and_describe_rule() {
        let mut errors = ValidationErrors::new();
        errors.add("message", length_error("short", Some(10), Some(2000)));
        errors.add("email", ValidationError::new("email"));
        errors.add("full_name", length_error("", Some(1), Some(100)));

        let issues = collect_issues(&errors, FIELDS);

        assert_eq!(
            summarize(&issues),
            "fullName: Full name is required, email: Invalid email address, message: Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_too_long_and_custom_message() {
        let mut errors = ValidationErrors::new();
        errors.add("full_name", length_error(&"x".repeat(101), Some(1), Some(100)));
        errors.add(
            "email",
            ValidationError::new("custom").with_message(Cow::from("Nope")),
        );

        let issues = collect_issues(&errors, FIELDS);

        assert_eq!(issues[0].message, "Full name is too long");
        assert_eq!(issues[1].message, "Nope");
    }

    #[test]
    fn test_email_rule_accepts_ordinary_addresses() {
        for email in ["jane@x.com", "o'neil+forms@mail.example.co.uk", "sam_smith@tyres.example"] {
            assert!(validate_email(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn test_email_rule_rejects_unroutable_addresses() {
        for email in [
            "",
            "a..b@example.com",
            ".a@example.com",
            "a.@example.com",
            "a@b",
            "x@localhost",
            "jane@x.c",
            "jane doe@x.com",
        ] {
            let error = validate_email(email).unwrap_err();
            assert_eq!(error.message.as_deref(), Some("Invalid email address"), "{email}");
        }
    }
}

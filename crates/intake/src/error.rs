use sgvrecycle_notification::MailerError;
use validator::ValidationErrors;

use crate::{
    DELIVERY_FAILED, HandlerResult, INVALID_INPUT, Issue, NOT_CONFIGURED, Outcome, UNEXPECTED,
    form::FieldSpec,
    validation::{collect_issues, summarize},
};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("validation failed: {summary}")]
    Validation { summary: String, issues: Vec<Issue> },

    #[error("email service is not configured")]
    NotConfigured,

    #[error("email delivery failed: {0}")]
    Delivery(#[from] MailerError),

    #[error("unexpected failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl IntakeError {
    pub(crate) fn validation(errors: &ValidationErrors, fields: &[FieldSpec]) -> Self {
        let issues = collect_issues(errors, fields);

        IntakeError::Validation {
            summary: summarize(&issues),
            issues,
        }
    }
}

impl From<IntakeError> for HandlerResult {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation { summary, issues } if summary.is_empty() => {
                HandlerResult::rejected(INVALID_INPUT, issues)
            }
            IntakeError::Validation { summary, issues } => HandlerResult::rejected(summary, issues),
            IntakeError::NotConfigured => HandlerResult::failed(NOT_CONFIGURED),
            IntakeError::Delivery(_) => HandlerResult::failed(DELIVERY_FAILED),
            IntakeError::Unexpected(_) => HandlerResult::failed(UNEXPECTED),
        }
    }
}

impl From<Result<Outcome, IntakeError>> for HandlerResult {
    fn from(result: Result<Outcome, IntakeError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(err) => err.into(),
        }
    }
}

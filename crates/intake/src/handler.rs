use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use lettre::{
    Address,
    address::AddressError,
    message::Mailbox,
};
use sgvrecycle_notification::{EmailConfig, Mailer, NotificationEmail};

use crate::{
    HandlerResult, IntakeError, Outcome, SubmittedForm,
    form::{IntakeForm, ReplyTo},
};

/// Fixed sender and recipients of every notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Addresses {
    pub from: Mailbox,
    pub to: Mailbox,
    pub contact_to: Option<Mailbox>,
}

impl Addresses {
    pub fn from_config(config: &EmailConfig) -> Result<Self, AddressError> {
        Ok(Self {
            from: config.from_address.parse()?,
            to: config.to_address.parse()?,
            contact_to: config
                .contact_to_address
                .as_deref()
                .filter(|address| !address.is_empty())
                .map(str::parse)
                .transpose()?,
        })
    }

    fn reply_to(&self, reply_to: ReplyTo) -> Result<Mailbox, AddressError> {
        match reply_to {
            ReplyTo::Submitter(email) => Ok(Mailbox::new(None, email.parse::<Address>()?)),
            ReplyTo::Named(name) => Ok(Mailbox::new(Some(name), self.from.email.clone())),
        }
    }
}

/// Validates submissions and turns accepted ones into notifications.
///
/// `mailer` is `None` when no provider credential is configured; submissions
/// still validate but are never sent.
#[derive(Clone)]
pub struct Intake {
    mailer: Option<Arc<dyn Mailer>>,
    addresses: Addresses,
}

impl Intake {
    pub fn new(mailer: Option<Arc<dyn Mailer>>, addresses: Addresses) -> Self {
        Self { mailer, addresses }
    }

    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    pub fn addresses(&self) -> &Addresses {
        &self.addresses
    }

    /// Run a submission through the intake pipeline and map it for the caller.
    pub async fn handle<F: IntakeForm>(&self, form: &SubmittedForm) -> HandlerResult {
        self.submit::<F>(form).await.into()
    }

    /// Like [`Intake::handle`] but keeps the failure kind. Panics raised while
    /// processing are reported as [`IntakeError::Unexpected`].
    #[tracing::instrument(name = "intake", skip_all, fields(form = %F::KIND))]
    pub async fn submit<F: IntakeForm>(&self, form: &SubmittedForm) -> Result<Outcome, IntakeError> {
        let result = match AssertUnwindSafe(self.process::<F>(form)).catch_unwind().await {
            Ok(result) => result,
            Err(_) => Err(IntakeError::Unexpected(anyhow::anyhow!(
                "panic while processing submission"
            ))),
        };

        match &result {
            Ok(Outcome::Discarded) => {
                tracing::warn!("Bot detected via decoy field, submission discarded")
            }
            Ok(Outcome::Sent { id, .. }) => tracing::info!(%id, "Notification sent"),
            Err(IntakeError::Validation { issues, .. }) => {
                tracing::info!(issues = issues.len(), "Form validation failed")
            }
            Err(IntakeError::NotConfigured) => {
                tracing::error!("Email API key is not set, notification not sent")
            }
            Err(IntakeError::Delivery(err)) => {
                tracing::error!(error = %err, "Failed to send notification")
            }
            Err(IntakeError::Unexpected(err)) => {
                tracing::error!(error = %err, "Unexpected error while handling submission")
            }
        }

        result
    }

    async fn process<F: IntakeForm>(&self, form: &SubmittedForm) -> Result<Outcome, IntakeError> {
        if form.is_spam() {
            return Ok(Outcome::Discarded);
        }

        let input = F::from_submission(form);
        input
            .validate()
            .map_err(|errors| IntakeError::validation(&errors, F::FIELDS))?;

        let content = input.compose().map_err(anyhow::Error::from)?;

        let Some(mailer) = &self.mailer else {
            return Err(IntakeError::NotConfigured);
        };

        let email = NotificationEmail {
            from: self.addresses.from.clone(),
            to: F::recipient(&self.addresses).clone(),
            reply_to: self
                .addresses
                .reply_to(input.reply_to())
                .map_err(anyhow::Error::from)?,
            subject: content.subject,
            html: content.html,
            text: content.text,
        };

        let id = mailer.send(&email).await?;

        Ok(Outcome::Sent {
            message: F::CONFIRMATION,
            id,
        })
    }
}

use std::{borrow::Cow, str::FromStr};

use askama::Template;
use lettre::message::Mailbox;
use sgvrecycle_notification::template::{ContactHtml, ContactPlain};
use strum::{Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

use super::{EmailContent, FieldSpec, FormKind, IntakeForm, ReplyTo};
use crate::{
    Addresses, SubmittedForm, sanitize_multiline, sanitize_text, validation::validate_email,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Topic {
    Collection,
    Sell,
    General,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Collection => "Schedule Collection",
            Topic::Sell => "Sell Material",
            Topic::General => "General Inquiry",
        }
    }
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    Topic::from_str(topic)
        .map(|_| ())
        .map_err(|_| ValidationError::new("topic").with_message(Cow::from("Please select a valid topic")))
}

#[derive(Debug, Clone, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

impl ContactForm {
    fn topic_label(&self) -> &str {
        match Topic::from_str(&self.topic) {
            Ok(topic) => topic.label(),
            Err(_) => &self.topic,
        }
    }
}

impl IntakeForm for ContactForm {
    const KIND: FormKind = FormKind::Contact;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("fullName", "full_name", "Full name"),
        FieldSpec::new("company", "company", "Company name"),
        FieldSpec::new("email", "email", "Email"),
        FieldSpec::new("topic", "topic", "Topic"),
        FieldSpec::new("message", "message", "Message"),
    ];
    const CONFIRMATION: &'static str =
        "Your message has been sent successfully. We will get back to you shortly.";

    fn from_submission(form: &SubmittedForm) -> Self {
        Self {
            full_name: form.text("fullName"),
            company: form.optional("company"),
            email: form.text("email"),
            topic: form.text("topic"),
            message: form.text("message"),
        }
    }

    fn reply_to(&self) -> ReplyTo {
        ReplyTo::Submitter(self.email.to_owned())
    }

    fn compose(&self) -> Result<EmailContent, askama::Error> {
        let topic = self.topic_label();
        let full_name = sanitize_text(&self.full_name);
        let company = self.company.as_deref().map(sanitize_text);

        let html = ContactHtml {
            topic,
            full_name: &full_name,
            company: company.as_deref(),
            email: &self.email,
            message: &sanitize_multiline(&self.message),
        }
        .render()?;

        let text = ContactPlain {
            topic,
            full_name: &full_name,
            company: company.as_deref(),
            email: &self.email,
            message: &sanitize_text(&self.message),
        }
        .render()?;

        Ok(EmailContent {
            subject: format!("New Contact Form Submission: {topic}"),
            html,
            text,
        })
    }

    fn recipient(addresses: &Addresses) -> &Mailbox {
        addresses.contact_to.as_ref().unwrap_or(&addresses.to)
    }
}

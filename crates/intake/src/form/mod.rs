mod collection;
mod contact;
mod purchasing;
mod valuation;

pub use collection::*;
pub use contact::*;
pub use purchasing::*;
pub use valuation::*;

use lettre::message::Mailbox;
use strum::Display;
use validator::Validate;

use crate::{Addresses, SubmittedForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FormKind {
    Contact,
    CollectionRequest,
    PurchasingRequest,
    ValuationRequest,
}

/// How a recognized field is named on the wire, in the struct, and to people.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ident: &'static str,
    pub label: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, ident: &'static str, label: &'static str) -> Self {
        Self { name, ident, label }
    }
}

/// Where replies to a notification should go.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyTo {
    /// The address the submitter typed in.
    Submitter(String),
    /// No submitter address: the sender address with the submitter's name.
    Named(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// A form variant accepted by [`crate::Intake`].
pub trait IntakeForm: Validate + Send + Sync + Sized {
    const KIND: FormKind;
    const FIELDS: &'static [FieldSpec];
    const CONFIRMATION: &'static str;

    fn from_submission(form: &SubmittedForm) -> Self;

    fn reply_to(&self) -> ReplyTo;

    /// Render subject and bodies. Free text is sanitized here.
    fn compose(&self) -> Result<EmailContent, askama::Error>;

    fn recipient(addresses: &Addresses) -> &Mailbox {
        &addresses.to
    }
}

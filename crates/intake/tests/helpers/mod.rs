#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sgvrecycle_intake::{Addresses, Intake, SubmittedForm};
use sgvrecycle_notification::{EmailConfig, Mailer, MailerError, NotificationEmail};

/// Mailer that keeps every message instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<NotificationEmail>>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<NotificationEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &NotificationEmail) -> Result<String, MailerError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        if self.fail {
            return Err(MailerError::Rejected("domain not verified".to_owned()));
        }

        Ok(format!("msg-{}", sent.len()))
    }
}

pub fn addresses() -> Addresses {
    Addresses::from_config(&EmailConfig::default()).unwrap()
}

pub fn setup_intake() -> (Intake, RecordingMailer) {
    let mailer = RecordingMailer::default();
    let intake = Intake::new(Some(Arc::new(mailer.clone())), addresses());

    (intake, mailer)
}

pub fn setup_failing_intake() -> (Intake, RecordingMailer) {
    let mailer = RecordingMailer::failing();
    let intake = Intake::new(Some(Arc::new(mailer.clone())), addresses());

    (intake, mailer)
}

pub fn setup_unconfigured_intake() -> Intake {
    Intake::new(None, addresses())
}

pub fn contact_form() -> SubmittedForm {
    SubmittedForm::new()
        .with("fullName", "Jane Doe")
        .with("email", "jane@x.com")
        .with("topic", "general")
        .with("message", "Please call me back about pricing.")
}

pub fn collection_form() -> SubmittedForm {
    SubmittedForm::new()
        .with("companyName", "Acme Tyres")
        .with("contactName", "Sam Smith")
        .with("phoneNumber", "0113 496 0000")
        .with("materialType", "rubber")
        .with("postcode", "LS1 4AP")
        .with("estimatedWeight", "2 tonnes")
}

pub fn purchasing_form() -> SubmittedForm {
    SubmittedForm::new()
        .with("fullName", "Jane Doe")
        .with("businessEmail", "jane@acme.com")
        .with("companyName", "Acme")
        .with("materialType", "Copper")
        .with("estimatedQuantity", "5 tonnes")
}

pub fn valuation_form() -> SubmittedForm {
    SubmittedForm::new()
        .with("materialCategory", "Rubber")
        .with("estimatedWeight", "3t")
        .with("saleType", "one-off")
        .with("materialGrade", "B")
        .with("name", "Sam")
        .with("email", "sam@tyres.example")
}

/// Mailer that blows up mid-send.
pub struct PanickingMailer;

#[async_trait]
impl Mailer for PanickingMailer {
    async fn send(&self, _email: &NotificationEmail) -> Result<String, MailerError> {
        panic!("connection pool poisoned")
    }
}

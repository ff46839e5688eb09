#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sgvrecycle::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig},
};
use sgvrecycle_intake::{Addresses, Intake};
use sgvrecycle_notification::{EmailConfig, Mailer, MailerError, NotificationEmail};
use tower::ServiceExt;

/// Mailer that records every message and answers with a fixed outcome.
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
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &NotificationEmail) -> Result<String, MailerError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        if self.fail {
            return Err(MailerError::Rejected("invalid api key".to_owned()));
        }

        Ok(format!("msg-{}", sent.len()))
    }
}

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            api_key: "re_test".to_string(),
            contact_to_address: Some("enquiries@sgvrecycle.co.uk".to_string()),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

fn app(mailer: Option<Arc<dyn Mailer>>) -> Router {
    let config = create_test_config();
    let addresses = Addresses::from_config(&config.email).unwrap();
    let intake = Intake::new(mailer, addresses);

    sgvrecycle::routes::router(AppState { intake })
}

pub fn setup_app() -> (Router, RecordingMailer) {
    let mailer = RecordingMailer::default();
    (app(Some(Arc::new(mailer.clone()))), mailer)
}

pub fn setup_failing_app() -> (Router, RecordingMailer) {
    let mailer = RecordingMailer::failing();
    (app(Some(Arc::new(mailer.clone()))), mailer)
}

pub fn setup_unconfigured_app() -> Router {
    app(None)
}

pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<Response<Body>> {
    let body = serde_urlencoded::to_string(fields)?;
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;

    Ok(app.oneshot(request).await?)
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<Response<Body>> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    Ok(app.oneshot(request).await?)
}

pub async fn json_body(response: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

pub const CONTACT: &[(&str, &str)] = &[
    ("fullName", "Jane Doe"),
    ("email", "jane@x.com"),
    ("topic", "general"),
    ("message", "Please call me back about pricing."),
];

pub const COLLECTION: &[(&str, &str)] = &[
    ("companyName", "Acme Tyres"),
    ("contactName", "Sam Smith"),
    ("phoneNumber", "0113 496 0000"),
    ("materialType", "rubber"),
    ("postcode", "LS1 4AP"),
    ("estimatedWeight", "2 tonnes"),
];

pub const PURCHASING: &[(&str, &str)] = &[
    ("fullName", "Jane Doe"),
    ("businessEmail", "jane@acme.com"),
    ("companyName", "Acme"),
    ("materialType", "Copper"),
    ("estimatedQuantity", "5 tonnes"),
];

pub const VALUATION: &[(&str, &str)] = &[
    ("materialCategory", "Rubber"),
    ("estimatedWeight", "3t"),
    ("saleType", "one-off"),
    ("materialGrade", "B"),
    ("name", "Sam"),
    ("email", "sam@tyres.example"),
];

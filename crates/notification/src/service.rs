//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use ulid::Ulid;

use crate::{Mailer, MailerError, NotificationEmail};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider API key, used as the SMTP password. Empty means not configured.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_username")]
    pub smtp_username: String,
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_to_address")]
    pub to_address: String,
    /// Recipient for contact form notifications, falls back to `to_address`
    #[serde(default)]
    pub contact_to_address: Option<String>,
    /// Log outgoing notifications instead of delivering them
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_smtp_username(),
            smtp_tls: default_smtp_tls(),
            from_address: default_from_address(),
            to_address: default_to_address(),
            contact_to_address: None,
            dry_run: false,
        }
    }
}

impl EmailConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_smtp_host() -> String {
    "smtp.resend.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_username() -> String {
    "resend".to_string()
}

fn default_smtp_tls() -> bool {
    true
}

fn default_from_address() -> String {
    "SGV Recycle <noreply@sgvrecycle.co.uk>".to_string()
}

fn default_to_address() -> String {
    "salim@sgvrecyclingltd.co.uk".to_string()
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, MailerError> {
        let creds = Credentials::new(config.smtp_username.clone(), config.api_key.clone());

        let mailer = if config.smtp_tls {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP TLS disabled, using plain connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            skip_sending: config.dry_run,
        })
    }

    /// Create a service that logs notifications and skips SMTP entirely
    pub fn new_dry_run() -> Self {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        tracing::info!("Dry-run email service initialized (SMTP calls skipped)");

        Self {
            mailer,
            skip_sending: true,
        }
    }
}

#[async_trait]
impl Mailer for EmailService {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &NotificationEmail) -> Result<String, MailerError> {
        let id = format!("{}@{}", Ulid::new(), email.from.email.domain());

        let message = Message::builder()
            .message_id(Some(format!("<{id}>")))
            .from(email.from.clone())
            .reply_to(email.reply_to.clone())
            .to(email.to.clone())
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))?;

        if self.skip_sending {
            tracing::info!(%id, "Dry-run email service: skipping SMTP send");
            return Ok(id);
        }

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        tracing::info!(%id, "Email sent");

        Ok(id)
    }
}

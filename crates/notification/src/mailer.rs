use async_trait::async_trait;
use lettre::message::Mailbox;

/// A rendered notification ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEmail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Mailbox,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("send task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("provider rejected message: {0}")]
    Rejected(String),
}

/// Outbound email collaborator.
///
/// Implementations either return the provider-assigned id of the accepted
/// message or an error. They never retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &NotificationEmail) -> Result<String, MailerError>;
}

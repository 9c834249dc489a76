use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailSenderError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    BuildFailed(String),

    #[error("Transport error: {0}")]
    TransportFailed(String),
}

/// Outgoing port for raw email delivery. Implementations decide the
/// transport; callers only provide addressing and an HTML body.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str)
        -> Result<(), EmailSenderError>;
}

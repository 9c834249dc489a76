use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailNotifierError {
    #[error("Email sending failed: {0}")]
    SendFailed(String),
}

/// Outgoing port for user-facing notification emails. The caller supplies
/// the signed email token; the implementation owns link construction and
/// message content.
#[async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_confirmation_email(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), EmailNotifierError>;
}

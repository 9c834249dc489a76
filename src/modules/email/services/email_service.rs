use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailNotifierError, UserEmailNotifier,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Builds the confirmation message and hands it to the configured sender.
/// `app_url` is the externally reachable base URL of this service.
pub struct UserEmailService {
    sender: Arc<dyn EmailSender>,
    app_url: String,
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, app_url: &str) -> Self {
        Self {
            sender,
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    fn confirmation_link(&self, token: &str) -> String {
        format!("{}/api/auth/confirmed_email/{}", self.app_url, token)
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_confirmation_email(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), EmailNotifierError> {
        let link = self.confirmation_link(token);
        let body = format!(
            "<h2>Hi {username},</h2>\
             <p>Thanks for signing up. Please confirm your email address by \
             clicking the link below:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>If you did not create this account, you can ignore this message.</p>"
        );

        self.sender
            .send_email(to, "Confirm your email", &body)
            .await
            .map_err(|e| EmailNotifierError::SendFailed(e.to_string()))
    }
}

//! Transactional mail client module
//!
//! Thin wrapper over SES `SendEmail`. One call per notification, no queue,
//! no retry; the call's own result is the only delivery signal.

use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::info;

use crate::errors::HubError;

pub struct MailClient {
    ses_client: aws_sdk_ses::Client,
}

impl MailClient {
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            ses_client: aws_sdk_ses::Client::new(&config),
        }
    }

    /// Sends one plain-text email and returns the provider message id.
    ///
    /// # Errors
    ///
    /// `Downstream` when the message cannot be built or the send call
    /// fails.
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        text_body: &str,
    ) -> Result<String, HubError> {
        let subject_content = Content::builder()
            .data(subject)
            .charset("UTF-8")
            .build()
            .map_err(|e| HubError::Downstream(format!("Failed to build subject: {}", e)))?;

        let text_content = Content::builder()
            .data(text_body)
            .charset("UTF-8")
            .build()
            .map_err(|e| HubError::Downstream(format!("Failed to build text body: {}", e)))?;

        let message = Message::builder()
            .subject(subject_content)
            .body(Body::builder().text(text_content).build())
            .build();

        let destination = Destination::builder().to_addresses(to).build();

        let result = self
            .ses_client
            .send_email()
            .source(from)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| HubError::Downstream(format!("Failed to send email: {}", e)))?;

        info!(message_id = %result.message_id(), "Email accepted by SES");

        Ok(result.message_id().to_string())
    }
}

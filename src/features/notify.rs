use chrono::Utc;
use tracing::{error, info};

use crate::clients::MailClient;
use crate::core::config::AppConfig;
use crate::core::models::NotifyState;
use crate::errors::HubError;
use crate::utils::links::share_body;

/// Shown when the deployment lacks the configured sender/recipient pair.
/// Deliberately distinct from the delivery-failure wording so users know
/// retrying will not help.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email delivery is not configured on this deployment. Please contact the site operator.";

/// Shown when the mail service itself rejects or drops the send.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send the email. Please try again later.";

const FEEDBACK_SUBJECT: &str = "New feedback for AI Insights Hub";

/// The two payloads the notifier accepts.
#[derive(Debug)]
pub enum Notification {
    Feedback {
        message: String,
    },
    Share {
        recipient: String,
        article_title: String,
        article_content: String,
    },
}

/// Dispatch one notification email.
///
/// Configuration is checked before anything leaves the process, so a
/// misconfigured deployment never makes a mail call.
pub async fn run(
    mailer: &MailClient,
    config: &AppConfig,
    notification: Notification,
) -> NotifyState {
    match dispatch(mailer, config, notification).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Notification email dispatched");
            NotifyState {
                success: true,
                error: None,
            }
        }
        Err(e) => {
            error!("Error dispatching notification: {}", e);
            failure_state(&e)
        }
    }
}

async fn dispatch(
    mailer: &MailClient,
    config: &AppConfig,
    notification: Notification,
) -> Result<String, HubError> {
    match notification {
        Notification::Feedback { message } => {
            let (sender, recipient) = feedback_addresses(config)?;
            let body = format!("Received at {}\n\n{}", Utc::now().to_rfc3339(), message);
            mailer.send(&sender, &recipient, FEEDBACK_SUBJECT, &body).await
        }
        Notification::Share {
            recipient,
            article_title,
            article_content,
        } => {
            let sender = sender_address(config)?;
            let body = share_body(&article_title, &article_content);
            mailer.send(&sender, &recipient, &article_title, &body).await
        }
    }
}

/// The feedback path needs both configured addresses; either missing is a
/// configuration failure, detected before any mail call.
pub fn feedback_addresses(config: &AppConfig) -> Result<(String, String), HubError> {
    let sender = sender_address(config)?;
    let recipient = config
        .feedback_recipient
        .clone()
        .ok_or_else(|| HubError::Configuration("FEEDBACK_RECIPIENT_ADDRESS".to_string()))?;
    Ok((sender, recipient))
}

pub fn sender_address(config: &AppConfig) -> Result<String, HubError> {
    config
        .feedback_sender
        .clone()
        .ok_or_else(|| HubError::Configuration("FEEDBACK_SENDER_ADDRESS".to_string()))
}

/// Maps an error to the user-facing state, keeping the configuration case
/// distinguishable from a transient delivery failure.
#[must_use]
pub fn failure_state(error: &HubError) -> NotifyState {
    let message = match error {
        HubError::Configuration(_) => NOT_CONFIGURED_MESSAGE,
        _ => DELIVERY_FAILED_MESSAGE,
    };

    NotifyState {
        success: false,
        error: Some(message.to_string()),
    }
}

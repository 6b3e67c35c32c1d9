//! API Lambda handler - thin router that delegates to the feature
//! operations.
//!
//! This module handles:
//! - Request body extraction and form decoding
//! - Per-route validation (delegated to `parsing`)
//! - Dispatch to the summarize, chat, and notify features
//!
//! Validated requests always come back as 200 with the operation's own
//! state payload, including its generic error message when the downstream
//! call failed. Only malformed requests change the status code.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::GeminiClient;
use crate::clients::MailClient;
use crate::core::config::AppConfig;
use crate::core::models::{ChatState, NotifyState, ShareLinkState, SummaryState};
use crate::features::{chat, notify, summarize};
use crate::utils::links;

pub use self::function_handler as handler;

const INVALID_ARTICLE_MESSAGE: &str = "Invalid input. Please provide valid article content.";
const INVALID_CHAT_MESSAGE: &str = "Invalid input.";
const INVALID_FEEDBACK_MESSAGE: &str = "Feedback cannot be empty.";
const INVALID_SHARE_MESSAGE: &str = "Please provide a valid recipient email address.";

/// Lambda handler for the API entrypoint.
///
/// Routes form submissions to the matching operation based on path.
///
/// # Errors
///
/// Returns an error response payload if the request is malformed;
/// otherwise a 200 with the operation's state as the JSON body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let correlation_id = Uuid::new_v4();

    let Some(path) = extract_path(&event.payload) else {
        error!(%correlation_id, "Request missing path");
        return Ok(helpers::err_response(400, "Missing path"));
    };

    info!(%correlation_id, raw_path = %path, "Request path");

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    if path.ends_with("/summarize") {
        return Ok(handle_summarize(&config, body).await);
    }

    if path.ends_with("/share/link") {
        return Ok(handle_share_link(body));
    }

    if path.ends_with("/chat") {
        return Ok(handle_chat(&config, body).await);
    }

    if path.ends_with("/feedback") {
        return Ok(handle_feedback(&config, body).await);
    }

    if path.ends_with("/share") {
        return Ok(handle_share(&config, body).await);
    }

    error!(%correlation_id, raw_path = %path, "No route for path");
    Ok(helpers::err_response(404, "Not found"))
}

async fn handle_summarize(config: &AppConfig, body: &str) -> Value {
    let request = match parsing::SummarizeRequest::from_form(body) {
        Ok(r) => r,
        Err(e) => {
            error!("Summarize validation failed: {}", e);
            return helpers::json_response(
                400,
                &SummaryState {
                    summary: None,
                    error: Some(INVALID_ARTICLE_MESSAGE.to_string()),
                },
            );
        }
    };

    let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    helpers::json_response(200, &summarize::run(&client, &request).await)
}

async fn handle_chat(config: &AppConfig, body: &str) -> Value {
    let request = match parsing::ChatRequest::from_form(body) {
        Ok(r) => r,
        Err(e) => {
            error!("Chat validation failed: {}", e);
            return helpers::json_response(
                400,
                &ChatState {
                    messages: Vec::new(),
                    error: Some(INVALID_CHAT_MESSAGE.to_string()),
                },
            );
        }
    };

    let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    helpers::json_response(200, &chat::run(&client, request).await)
}

async fn handle_feedback(config: &AppConfig, body: &str) -> Value {
    let request = match parsing::FeedbackRequest::from_form(body) {
        Ok(r) => r,
        Err(e) => {
            error!("Feedback validation failed: {}", e);
            return helpers::json_response(
                400,
                &NotifyState {
                    success: false,
                    error: Some(INVALID_FEEDBACK_MESSAGE.to_string()),
                },
            );
        }
    };

    let mailer = MailClient::new().await;
    let notification = notify::Notification::Feedback {
        message: request.feedback,
    };
    helpers::json_response(200, &notify::run(&mailer, config, notification).await)
}

async fn handle_share(config: &AppConfig, body: &str) -> Value {
    let request = match parsing::ShareRequest::from_form(body) {
        Ok(r) => r,
        Err(e) => {
            error!("Share validation failed: {}", e);
            return helpers::json_response(
                400,
                &NotifyState {
                    success: false,
                    error: Some(INVALID_SHARE_MESSAGE.to_string()),
                },
            );
        }
    };

    let mailer = MailClient::new().await;
    let notification = notify::Notification::Share {
        recipient: request.recipient,
        article_title: request.article_title,
        article_content: request.article_content,
    };
    helpers::json_response(200, &notify::run(&mailer, config, notification).await)
}

/// The client-side share variant: no mail call, just a prefilled
/// `mailto:` link the browser can open.
fn handle_share_link(body: &str) -> Value {
    match parsing::ShareRequest::from_form(body) {
        Ok(request) => helpers::json_response(
            200,
            &ShareLinkState {
                url: Some(links::share_link(
                    &request.recipient,
                    &request.article_title,
                    &request.article_content,
                )),
                error: None,
            },
        ),
        Err(e) => {
            error!("Share link validation failed: {}", e);
            helpers::json_response(
                400,
                &ShareLinkState {
                    url: None,
                    error: Some(INVALID_SHARE_MESSAGE.to_string()),
                },
            )
        }
    }
}

// ============================================================================
// Request Extraction Helpers
// ============================================================================

fn extract_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
}

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

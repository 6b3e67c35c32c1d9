use std::collections::HashMap;

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::core::models::ChatTurn;
use crate::errors::HubError;

/// Minimum number of characters an article must have before we spend a
/// model call summarizing it.
pub const MIN_ARTICLE_CONTENT_CHARS: usize = 100;

/// Summarize form, validated.
#[derive(Debug)]
pub struct SummarizeRequest {
    pub article_content: String,
}

/// Chat form, validated. `messages` is the client-replayed transcript,
/// already deserialized from its JSON form field.
#[derive(Debug)]
pub struct ChatRequest {
    pub article_content: String,
    pub messages: Vec<ChatTurn>,
    pub user_question: String,
}

/// Feedback form, validated.
#[derive(Debug)]
pub struct FeedbackRequest {
    pub feedback: String,
}

/// Share form, validated.
#[derive(Debug)]
pub struct ShareRequest {
    pub recipient: String,
    pub article_title: String,
    pub article_content: String,
}

/// Decodes a URL-encoded form value using the percent_encoding crate.
///
/// # Examples
///
/// ```
/// use insights_hub::api::parsing::decode_url_component;
///
/// let decoded = decode_url_component("hello%20world").unwrap();
/// assert_eq!(decoded, "hello world");
///
/// let decoded_plus = decode_url_component("hello+world").unwrap();
/// assert_eq!(decoded_plus, "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.replace('+', " "))
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Parses a URL-encoded form body into a field map.
///
/// # Examples
///
/// ```
/// use insights_hub::api::parsing::parse_form_fields;
///
/// let fields = parse_form_fields("articleContent=AI%20article&feedback=great").unwrap();
/// assert_eq!(fields.get("articleContent").map(String::as_str), Some("AI article"));
/// assert_eq!(fields.get("feedback").map(String::as_str), Some("great"));
/// ```
pub fn parse_form_fields(form_data: &str) -> Result<HashMap<String, String>, HubError> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        if let Some(idx) = pair.find('=') {
            let key = decode_url_component(&pair[..idx])
                .map_err(|e| HubError::Validation(format!("Failed to decode key: {}", e)))?;

            let value = decode_url_component(&pair[idx + 1..])
                .map_err(|e| HubError::Validation(format!("Failed to decode value: {}", e)))?;

            map.insert(key, value);
        }
    }

    Ok(map)
}

fn field(fields: &HashMap<String, String>, name: &str) -> Result<String, HubError> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| HubError::Validation(format!("Missing field: {}", name)))
}

impl SummarizeRequest {
    pub fn from_form(form_data: &str) -> Result<Self, HubError> {
        let fields = parse_form_fields(form_data)?;
        let article_content = field(&fields, "articleContent")?;

        if article_content.chars().count() < MIN_ARTICLE_CONTENT_CHARS {
            return Err(HubError::Validation(format!(
                "articleContent must be at least {} characters",
                MIN_ARTICLE_CONTENT_CHARS
            )));
        }

        Ok(Self { article_content })
    }
}

impl ChatRequest {
    /// A malformed `messages` field fails fast here, before any model
    /// call. The transcript is client-supplied state and an unparseable
    /// one cannot be meaningfully replayed.
    pub fn from_form(form_data: &str) -> Result<Self, HubError> {
        let fields = parse_form_fields(form_data)?;
        let article_content = field(&fields, "articleContent")?;
        let raw_messages = field(&fields, "messages")?;
        let user_question = field(&fields, "userQuestion")?;

        if user_question.is_empty() {
            return Err(HubError::Validation(
                "userQuestion cannot be empty".to_string(),
            ));
        }

        let messages: Vec<ChatTurn> = serde_json::from_str(&raw_messages)
            .map_err(|e| HubError::Validation(format!("Malformed messages history: {}", e)))?;

        Ok(Self {
            article_content,
            messages,
            user_question,
        })
    }
}

impl FeedbackRequest {
    pub fn from_form(form_data: &str) -> Result<Self, HubError> {
        let fields = parse_form_fields(form_data)?;
        let feedback = field(&fields, "feedback")?;

        if feedback.is_empty() {
            return Err(HubError::Validation("feedback cannot be empty".to_string()));
        }

        Ok(Self { feedback })
    }
}

impl ShareRequest {
    pub fn from_form(form_data: &str) -> Result<Self, HubError> {
        let fields = parse_form_fields(form_data)?;
        let recipient = field(&fields, "recipient")?;
        let article_title = field(&fields, "articleTitle")?;
        let article_content = field(&fields, "articleContent")?;

        if !looks_like_email(&recipient) {
            return Err(HubError::Validation(format!(
                "recipient is not a valid email address: {}",
                recipient
            )));
        }

        Ok(Self {
            recipient,
            article_title,
            article_content,
        })
    }
}

/// Shallow shape check only; deliverability is the mail service's problem.
pub fn looks_like_email(address: &str) -> bool {
    static EMAIL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex compile"));

    EMAIL_RE.is_match(address)
}

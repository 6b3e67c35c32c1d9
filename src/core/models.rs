use serde::{Deserialize, Serialize};

/// Who produced a turn in the article chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One turn of the client-held conversation. The full ordered list is
/// resent by the client on every chat request; the server keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// Structured output of the summarization prompt.
#[derive(Debug, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

/// Structured output of the article chat prompt.
#[derive(Debug, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// What the summarize form gets back.
#[derive(Debug, Serialize)]
pub struct SummaryState {
    pub summary: Option<String>,
    pub error: Option<String>,
}

/// What the chat form gets back: the updated transcript plus an optional
/// error flag. On failure both a fallback model turn and the flag are set;
/// the consuming UI decides which to surface.
#[derive(Debug, Serialize)]
pub struct ChatState {
    pub messages: Vec<ChatTurn>,
    pub error: Option<String>,
}

/// What the feedback and share forms get back.
#[derive(Debug, Serialize)]
pub struct NotifyState {
    pub success: bool,
    pub error: Option<String>,
}

/// What the share-link form gets back.
#[derive(Debug, Serialize)]
pub struct ShareLinkState {
    pub url: Option<String>,
    pub error: Option<String>,
}

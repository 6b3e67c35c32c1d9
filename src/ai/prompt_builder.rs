//! Prompt templates for the two article operations.
//!
//! Both operations send a single templated prompt per request. The article
//! text is embedded verbatim: no truncation, no chunking, no map-reduce
//! for long articles.

use crate::core::models::{ChatTurn, Role};

/// Builds the summarization prompt around the full article text.
#[must_use]
pub fn build_summary_prompt(article_content: &str) -> String {
    format!(
        "Summarize the following article content in a concise manner:\n\n{}",
        article_content
    )
}

/// Builds the article chat prompt: grounding framing, the article, the
/// replayed history in original order, and the new question last.
///
/// The grounding rules are instruction-level only. The model is told to
/// answer from the article and to say so when the article has no answer;
/// nothing checks the produced answer against the article text.
#[must_use]
pub fn build_chat_prompt(
    article_content: &str,
    chat_history: &[ChatTurn],
    user_question: &str,
) -> String {
    format!(
        "You are a helpful assistant for the \"AI Insights Hub\" blog. \
         Your role is to answer user questions based *only* on the provided \
         article content. Do not use any external knowledge. If the answer \
         is not in the article, say that you cannot find the answer in the \
         provided text. If the user wants to contact the author or pass the \
         article along, point them to the share option instead of collecting \
         contact details yourself.\n\n\
         Here is the article content:\n\
         ---\n\
         {}\n\
         ---\n\n\
         Here is the conversation history:\n\
         ---\n\
         {}\n\
         ---\n\n\
         Here is the new user question:\n\
         {}\n\n\
         Based on the article and the conversation history, provide a \
         concise answer to the user's question.",
        article_content,
        render_history(chat_history),
        user_question
    )
}

/// Renders prior turns as one role-labeled line each, preserving order.
#[must_use]
pub fn render_history(chat_history: &[ChatTurn]) -> String {
    chat_history
        .iter()
        .map(|turn| format!("{}: {}", role_label(turn.role), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

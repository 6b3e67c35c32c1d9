use tracing::error;

use crate::ai::GeminiClient;
use crate::ai::prompt_builder::build_chat_prompt;
use crate::api::parsing::ChatRequest;
use crate::core::models::{ChatAnswer, ChatState, ChatTurn};
use crate::errors::HubError;

/// Error flag returned alongside the transcript when the model call fails.
pub const CHAT_FAILED_MESSAGE: &str = "Failed to get a response. Please try again later.";

/// Fallback turn appended to the transcript in place of a real answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error. Please try again.";

/// Answer one question against the article, threading the client-replayed
/// transcript through unchanged.
///
/// The prompt carries every prior turn in its original order with the new
/// question last. On failure the transcript still gains the user turn plus
/// exactly one fallback model turn, and the error flag is set; the caller
/// chooses which of the two signals to surface.
pub async fn run(client: &GeminiClient, request: ChatRequest) -> ChatState {
    let prompt = build_chat_prompt(
        &request.article_content,
        &request.messages,
        &request.user_question,
    );

    let transcript = with_user_turn(request.messages, &request.user_question);

    let result = client
        .generate_json(&prompt, GeminiClient::answer_schema())
        .await
        .and_then(|value| {
            serde_json::from_value::<ChatAnswer>(value)
                .map_err(|e| HubError::Schema(format!("Answer output mismatch: {}", e)))
        });

    match result {
        Ok(answer) => success_state(transcript, answer.answer),
        Err(e) => {
            error!("Error answering article question: {}", e);
            failure_state(transcript)
        }
    }
}

/// Appends the new question as a user turn.
#[must_use]
pub fn with_user_turn(mut messages: Vec<ChatTurn>, question: &str) -> Vec<ChatTurn> {
    messages.push(ChatTurn::user(question));
    messages
}

#[must_use]
pub fn success_state(mut transcript: Vec<ChatTurn>, answer: String) -> ChatState {
    transcript.push(ChatTurn::model(answer));
    ChatState {
        messages: transcript,
        error: None,
    }
}

#[must_use]
pub fn failure_state(mut transcript: Vec<ChatTurn>) -> ChatState {
    transcript.push(ChatTurn::model(FALLBACK_ANSWER));
    ChatState {
        messages: transcript,
        error: Some(CHAT_FAILED_MESSAGE.to_string()),
    }
}

use tracing::error;

use crate::ai::GeminiClient;
use crate::ai::prompt_builder::build_summary_prompt;
use crate::api::parsing::SummarizeRequest;
use crate::core::models::{SummaryResult, SummaryState};
use crate::errors::HubError;

/// What the caller sees when the model call fails, whatever the cause.
pub const SUMMARY_FAILED_MESSAGE: &str = "Failed to generate summary. Please try again later.";

/// Generate a summary for validated article content.
///
/// One prompt, one model call, and the summary is passed through
/// unchanged. Every failure past validation collapses into the same
/// generic message; the detail only goes to the logs.
pub async fn run(client: &GeminiClient, request: &SummarizeRequest) -> SummaryState {
    let prompt = build_summary_prompt(&request.article_content);

    let result = client
        .generate_json(&prompt, GeminiClient::summary_schema())
        .await
        .and_then(|value| {
            serde_json::from_value::<SummaryResult>(value)
                .map_err(|e| HubError::Schema(format!("Summary output mismatch: {}", e)))
        });

    match result {
        Ok(summary) => SummaryState {
            summary: Some(summary.summary),
            error: None,
        },
        Err(e) => {
            error!("Error summarizing article: {}", e);
            SummaryState {
                summary: None,
                error: Some(SUMMARY_FAILED_MESSAGE.to_string()),
            }
        }
    }
}

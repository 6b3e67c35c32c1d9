//! LLM (Gemini) API client module
//!
//! Encapsulates the single `generateContent` call both article operations
//! make. Responses are requested as JSON constrained by a response schema,
//! then handed back to the caller for typed decoding.

use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::HubError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API client for the summarize and chat prompts.
pub struct GeminiClient {
    api_key: String,
    model_name: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Response schema for the summarization prompt.
    #[must_use]
    pub fn summary_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": "A concise summary of the article content."
                }
            },
            "required": ["summary"]
        })
    }

    /// Response schema for the article chat prompt.
    #[must_use]
    pub fn answer_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "answer": {
                    "type": "string",
                    "description": "The answer to the user's question based on the \
                                    article content and conversation history."
                }
            },
            "required": ["answer"]
        })
    }

    /// Sends one prompt and returns the schema-constrained JSON object the
    /// model produced.
    ///
    /// # Errors
    ///
    /// `Downstream` for transport or service-side failures, `Schema` when
    /// the response carries no decodable JSON text.
    pub async fn generate_json(
        &self,
        prompt: &str,
        response_schema: Value,
    ) -> Result<Value, HubError> {
        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Sending generateContent request"
        );

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        let url = format!(
            "{}/{}:generateContent",
            GEMINI_API_BASE, self.model_name
        );

        let client = Client::new();
        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| HubError::Downstream(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HubError::Downstream(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            HubError::Downstream(format!("Failed to parse Gemini response: {}", e))
        })?;

        let text = extract_candidate_text(&response_json)
            .ok_or_else(|| HubError::Schema("No text in Gemini response".to_string()))?;

        serde_json::from_str(&text)
            .map_err(|e| HubError::Schema(format!("Model output is not valid JSON: {}", e)))
    }
}

/// Joins the text parts of the first candidate, if any.
fn extract_candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())?;

    let collected: Vec<String> = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .map(|s| s.to_string())
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

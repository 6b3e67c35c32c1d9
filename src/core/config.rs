use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: Option<String>,
    pub feedback_sender: Option<String>,
    pub feedback_recipient: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map_err(|e| format!("GEMINI_API_KEY: {}", e))?,
            gemini_model: env::var("GEMINI_MODEL").ok(),
            feedback_sender: env::var("FEEDBACK_SENDER_ADDRESS").ok(),
            feedback_recipient: env::var("FEEDBACK_RECIPIENT_ADDRESS").ok(),
        })
    }
}

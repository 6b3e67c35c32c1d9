use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("Invalid request input: {0}")]
    Validation(String),

    #[error("Missing required configuration: {0}")]
    Configuration(String),

    #[error("Downstream service call failed: {0}")]
    Downstream(String),

    #[error("Unexpected downstream response shape: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for HubError {
    fn from(error: reqwest::Error) -> Self {
        HubError::Downstream(error.to_string())
    }
}

impl From<anyhow::Error> for HubError {
    fn from(error: anyhow::Error) -> Self {
        HubError::Downstream(error.to_string())
    }
}

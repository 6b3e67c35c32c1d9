//! Common helper functions for API handlers.
//!
//! Response builders shared across routes. The handler returns Lambda
//! proxy responses as JSON values with `statusCode` and a stringified
//! `body`.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

/// Returns a response with the given status code and a serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body_str = serde_json::to_string(body).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        "{}".to_string()
    });

    json!({ "statusCode": status_code, "body": body_str })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

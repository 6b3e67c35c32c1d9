/// AI Insights Hub - the service layer behind a single-page article site.
///
/// This crate implements the three form-driven operations the site needs:
/// 1. Summarize: article text in, a concise model-written summary out
/// 2. Chat: article text + replayed transcript + question in, one grounded
///    answer out
/// 3. Notify: feedback or share emails dispatched through SES, plus a
///    client-side `mailto:` share link that needs no server send
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - The Gemini `generateContent` API for both article prompts
/// - SES for feedback and share email delivery
/// - Tokio for async runtime
///
/// Every handler is stateless: conversation continuity lives entirely in
/// the transcript the client resends with each chat request.
///
/// # Example
///
/// ```no_run
/// use insights_hub::ai::GeminiClient;
/// use insights_hub::api::parsing::SummarizeRequest;
/// use insights_hub::features::summarize;
///
/// #[tokio::main]
/// async fn main() {
///     // Set up structured logging
///     insights_hub::setup_logging();
///
///     let client = GeminiClient::new("dummy_key".to_string(), None);
///
///     // Form bodies arrive URL-encoded from the article page
///     let form_body = format!("articleContent={}", "a".repeat(150));
///     let request = SummarizeRequest::from_form(&form_body).unwrap();
///
///     let state = summarize::run(&client, &request).await;
///     match state.summary {
///         Some(summary) => println!("Summary: {}", summary),
///         None => println!("Failed: {:?}", state.error),
///     }
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod utils;

pub use errors::HubError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable
/// for `CloudWatch` Logs integration. It should be called at the start of
/// the Lambda handler.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

use insights_hub::api::parsing::{
    ChatRequest, FeedbackRequest, MIN_ARTICLE_CONTENT_CHARS, ShareRequest, SummarizeRequest,
    decode_url_component, looks_like_email, parse_form_fields,
};
use insights_hub::core::models::Role;
use insights_hub::errors::HubError;

fn lorem(len: usize) -> String {
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

#[test]
fn test_decode_url_component() {
    assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
    assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
    assert_eq!(
        decode_url_component("a%26b%3Dc").unwrap(),
        "a&b=c",
        "encoded separators must decode to literals"
    );
}

#[test]
fn test_parse_form_fields() {
    let fields = parse_form_fields("articleContent=AI%20article&userQuestion=what%3F").unwrap();
    assert_eq!(
        fields.get("articleContent").map(String::as_str),
        Some("AI article")
    );
    assert_eq!(fields.get("userQuestion").map(String::as_str), Some("what?"));
}

#[test]
fn test_summarize_rejects_short_article() {
    // Anything below the minimum must fail before a model call is possible
    let short = lorem(MIN_ARTICLE_CONTENT_CHARS - 1);
    let body = format!("articleContent={}", urlencode(&short));
    let result = SummarizeRequest::from_form(&body);

    match result {
        Err(HubError::Validation(msg)) => {
            assert!(msg.contains("articleContent"), "message names the field: {}", msg);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_summarize_accepts_minimum_length_article() {
    let article = lorem(150);
    let body = format!("articleContent={}", urlencode(&article));
    let request = SummarizeRequest::from_form(&body).unwrap();
    assert_eq!(request.article_content, article);
}

#[test]
fn test_summarize_missing_field() {
    let result = SummarizeRequest::from_form("feedback=wrong%20form");
    assert!(matches!(result, Err(HubError::Validation(_))));
}

#[test]
fn test_chat_rejects_empty_question() {
    let body = format!(
        "articleContent={}&messages=%5B%5D&userQuestion=",
        urlencode(&lorem(150))
    );
    let result = ChatRequest::from_form(&body);
    assert!(
        matches!(result, Err(HubError::Validation(_))),
        "empty question must be rejected before any downstream call"
    );
}

#[test]
fn test_chat_parses_replayed_history() {
    let messages = r#"[{"role":"user","content":"Hi"},{"role":"model","content":"Hello"}]"#;
    let body = format!(
        "articleContent={}&messages={}&userQuestion=What%20is%20this%20about%3F",
        urlencode(&lorem(150)),
        urlencode(messages)
    );

    let request = ChatRequest::from_form(&body).unwrap();
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::User);
    assert_eq!(request.messages[1].role, Role::Model);
    assert_eq!(request.user_question, "What is this about?");
}

#[test]
fn test_chat_rejects_malformed_history() {
    // The transcript is client state; an unparseable one fails fast
    let body = format!(
        "articleContent={}&messages=not-json&userQuestion=why%3F",
        urlencode(&lorem(150))
    );
    let result = ChatRequest::from_form(&body);

    match result {
        Err(HubError::Validation(msg)) => {
            assert!(msg.contains("messages"), "message names the field: {}", msg);
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_chat_rejects_unknown_role_in_history() {
    let body = format!(
        "articleContent={}&messages={}&userQuestion=why%3F",
        urlencode(&lorem(150)),
        urlencode(r#"[{"role":"system","content":"x"}]"#)
    );
    assert!(matches!(
        ChatRequest::from_form(&body),
        Err(HubError::Validation(_))
    ));
}

#[test]
fn test_feedback_rejects_empty_text() {
    assert!(matches!(
        FeedbackRequest::from_form("feedback="),
        Err(HubError::Validation(_))
    ));
}

#[test]
fn test_feedback_accepts_text() {
    let request = FeedbackRequest::from_form("feedback=Great%20site%21").unwrap();
    assert_eq!(request.feedback, "Great site!");
}

#[test]
fn test_share_rejects_bad_recipient() {
    let invalid = ["", "not-an-email", "a@b", "two words@example.com"];
    for recipient in invalid {
        let body = format!(
            "recipient={}&articleTitle=T&articleContent=C",
            urlencode(recipient)
        );
        assert!(
            matches!(ShareRequest::from_form(&body), Err(HubError::Validation(_))),
            "should reject recipient: {:?}",
            recipient
        );
    }
}

#[test]
fn test_share_accepts_valid_recipient() {
    let body = "recipient=reader%40example.com&articleTitle=AI%20News&articleContent=Body";
    let request = ShareRequest::from_form(body).unwrap();
    assert_eq!(request.recipient, "reader@example.com");
    assert_eq!(request.article_title, "AI News");
}

#[test]
fn test_looks_like_email() {
    assert!(looks_like_email("reader@example.com"));
    assert!(!looks_like_email("reader@example"));
    assert!(!looks_like_email("@example.com"));
}

// Minimal encoder for building test bodies; production decoding is the
// code under test.
fn urlencode(input: &str) -> String {
    let mut out = String::new();
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

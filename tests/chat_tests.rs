use insights_hub::core::models::{ChatTurn, Role, SummaryResult, SummaryState};
use insights_hub::features::chat::{
    CHAT_FAILED_MESSAGE, FALLBACK_ANSWER, failure_state, success_state, with_user_turn,
};

#[test]
fn test_user_turn_is_appended_last() {
    let history = vec![ChatTurn::user("Hi"), ChatTurn::model("Hello")];
    let transcript = with_user_turn(history, "What is this about?");

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[2].role, Role::User);
    assert_eq!(transcript[2].content, "What is this about?");
}

#[test]
fn test_success_state_appends_one_model_turn() {
    let transcript = with_user_turn(Vec::new(), "What is this about?");
    let state = success_state(transcript, "An article about AI.".to_string());

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Model);
    assert_eq!(state.messages[1].content, "An article about AI.");
    assert!(state.error.is_none());
}

#[test]
fn test_failure_state_keeps_user_turn_and_adds_fallback() {
    // A failed model call still returns a coherent transcript: the new
    // user turn plus exactly one fallback model turn, with the flag set.
    let transcript = with_user_turn(vec![ChatTurn::user("Hi"), ChatTurn::model("Hello")], "Why?");
    let state = failure_state(transcript);

    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.messages[2].role, Role::User);
    assert_eq!(state.messages[2].content, "Why?");
    assert_eq!(state.messages[3].role, Role::Model);
    assert_eq!(state.messages[3].content, FALLBACK_ANSWER);

    let fallback_turns = state
        .messages
        .iter()
        .filter(|t| t.content == FALLBACK_ANSWER)
        .count();
    assert_eq!(fallback_turns, 1, "exactly one fallback turn");

    assert_eq!(state.error.as_deref(), Some(CHAT_FAILED_MESSAGE));
}

#[test]
fn test_chat_turn_wire_format() {
    let turn = ChatTurn::model("Hello");
    let json = serde_json::to_string(&turn).unwrap();
    assert_eq!(json, r#"{"role":"model","content":"Hello"}"#);

    let parsed: ChatTurn = serde_json::from_str(r#"{"role":"user","content":"Hi"}"#).unwrap();
    assert_eq!(parsed.role, Role::User);
}

#[test]
fn test_summary_passthrough_shape() {
    // A downstream {"summary": "X"} flows through unchanged with a null
    // error field on the wire.
    let result: SummaryResult = serde_json::from_value(serde_json::json!({"summary": "X"})).unwrap();
    let state = SummaryState {
        summary: Some(result.summary),
        error: None,
    };

    let body = serde_json::to_value(&state).unwrap();
    assert_eq!(body, serde_json::json!({"summary": "X", "error": null}));
}

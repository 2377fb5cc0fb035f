//! Session Tests
//!
//! The session owns history and validation around the stateless engine.

use crate::error::AppError;
use crate::i18n::Locale;
use crate::models::Role;
use crate::responder::Topic;
use crate::session::ChatSession;

#[test]
fn test_submit_appends_user_and_assistant_messages() {
    let mut session = ChatSession::new(Locale::English);

    let reply = session
        .submit("Why do I have mood swings?")
        .expect("submit must succeed");
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.topic, Some(Topic::Emotions));
    assert!(!reply.content.is_empty());

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Why do I have mood swings?");
    assert_eq!(messages[1].role, Role::Assistant);
}

#[test]
fn test_history_grows_across_turns() {
    let mut session = ChatSession::new(Locale::English);

    session.submit("hello there").expect("first turn");
    session.submit("what games can I play?").expect("second turn");

    assert_eq!(session.messages().len(), 4);
}

#[test]
fn test_oversized_message_is_rejected_and_not_recorded() {
    let mut session = ChatSession::new(Locale::English);

    let err = session
        .submit(&"a".repeat(2001))
        .expect_err("oversized message must be rejected");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(session.messages().is_empty());
}

#[test]
fn test_empty_message_gets_the_default_reply() {
    let mut session = ChatSession::new(Locale::English);

    let reply = session.submit("").expect("empty input is accepted");
    assert_eq!(reply.topic, Some(Topic::Fallback));
    assert!(!reply.content.is_empty());
}

#[test]
fn test_locale_switch_affects_later_replies_only() {
    let mut session = ChatSession::new(Locale::English);

    session.submit("tell me about puberty").expect("english turn");
    session.set_locale(Locale::Malay);
    session.submit("tell me about puberty").expect("malay turn");

    let messages = session.messages();
    assert_eq!(messages.len(), 4);
    // Same question, same topic, different language.
    assert_eq!(messages[1].topic, messages[3].topic);
    assert_ne!(messages[1].content, messages[3].content);
}

#[test]
fn test_transcript_round_trips_through_json() {
    let mut session = ChatSession::new(Locale::English);
    session.submit("how do I deal with body odor?").expect("turn");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("transcript.json");
    session.save_transcript(&path).expect("save transcript");

    let raw = std::fs::read_to_string(&path).expect("read transcript");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    let entries = value.as_array().expect("transcript is an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["role"], "user");
    assert_eq!(entries[1]["role"], "assistant");
    assert_eq!(entries[1]["topic"], "hygiene");
}

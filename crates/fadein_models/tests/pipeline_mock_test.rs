// Pipeline tests using MockDriver.
//
// These tests validate the full generate_screenplay pipeline without making
// real API calls, using a mock driver for fast, deterministic testing.

mod test_utils;

use fadein_core::Role;
use fadein_error::{FadeinErrorKind, GeminiErrorKind, ScreenplayErrorKind};
use fadein_interface::FadeinDriver;
use fadein_screenplay::generate_screenplay;
use test_utils::{MockDriver, message_text, valid_reply};

const IDEA: &str = "A lonely AI technician discovers a robot developing emotions.";

#[tokio::test]
async fn clean_json_reply_produces_screenplay() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(valid_reply());

    let outcome = generate_screenplay(&mock, IDEA).await?;

    assert!(!outcome.recovered());
    assert_eq!(outcome.screenplay().story_review, "A story about letting go.");
    assert!(outcome.screenplay().script.starts_with("FADE IN:"));
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn request_carries_system_instruction_and_idea() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(valid_reply());

    generate_screenplay(&mock, IDEA).await?;

    let request = mock.last_request().expect("a request was sent");
    assert_eq!(request.temperature, Some(0.9));
    assert_eq!(request.max_tokens, Some(8000));

    let system = request
        .messages
        .iter()
        .find(|m| m.role == Role::System)
        .expect("system message present");
    assert!(message_text(system).contains("Output valid JSON only"));

    let user = request
        .messages
        .iter()
        .find(|m| m.role == Role::User)
        .expect("user message present");
    assert!(message_text(user).contains(IDEA));
    Ok(())
}

#[tokio::test]
async fn fenced_reply_resolves_cleanly() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(format!("```json\n{}\n```", valid_reply()));

    let outcome = generate_screenplay(&mock, IDEA).await?;

    assert!(!outcome.recovered());
    assert!(outcome.screenplay().script.starts_with("FADE IN:"));
    Ok(())
}

#[tokio::test]
async fn prose_wrapped_reply_is_recovered() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(format!(
        "Sure! Here is your screenplay:\n{}\nEnjoy!",
        valid_reply()
    ));

    let outcome = generate_screenplay(&mock, IDEA).await?;

    assert!(outcome.recovered());
    assert!(outcome.screenplay().script.starts_with("FADE IN:"));
    Ok(())
}

#[tokio::test]
async fn garbage_reply_is_a_typed_resolution_error() {
    let mock = MockDriver::new_success("I am sorry, I cannot help with that.");

    let err = generate_screenplay(&mock, IDEA).await.unwrap_err();

    match err.kind() {
        FadeinErrorKind::Screenplay(e) => match &e.kind {
            ScreenplayErrorKind::Unresolvable { excerpt, .. } => {
                assert!(excerpt.contains("cannot help"));
            }
            other => panic!("expected Unresolvable, got {other}"),
        },
        other => panic!("expected screenplay error, got {other}"),
    }
}

#[tokio::test]
async fn blank_idea_is_rejected_before_any_call() {
    let mock = MockDriver::new_success(valid_reply());

    let err = generate_screenplay(&mock, "   \n").await.unwrap_err();

    match err.kind() {
        FadeinErrorKind::Screenplay(e) => {
            assert_eq!(e.kind, ScreenplayErrorKind::EmptyIdea);
        }
        other => panic!("expected screenplay error, got {other}"),
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn driver_errors_propagate_untouched() {
    let mock = MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "Model is overloaded".to_string(),
    });

    let err = generate_screenplay(&mock, IDEA).await.unwrap_err();

    match err.kind() {
        FadeinErrorKind::Gemini(e) => {
            assert!(matches!(
                e.kind,
                GeminiErrorKind::HttpError { status_code: 503, .. }
            ));
        }
        other => panic!("expected gemini error, got {other}"),
    }
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn missing_script_key_is_lenient() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(r#"{"story_review": "Only a review."}"#);

    let outcome = generate_screenplay(&mock, IDEA).await?;

    assert_eq!(outcome.screenplay().story_review, "Only a review.");
    assert_eq!(outcome.screenplay().script, "");
    Ok(())
}

#[test]
fn mock_reports_provider_metadata() {
    let mock = MockDriver::new_success("x");
    assert_eq!(mock.provider_name(), "mock");
    assert_eq!(mock.model_name(), "mock-model");
}

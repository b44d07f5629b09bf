//! Tutor conversation flow: optimistic turns, fallbacks, silent failures.

use std::sync::Arc;

use mathwhiz::app::{App, AppMessage, Intent, CHAT_FALLBACK_REPLY};
use mathwhiz::error::GatewayError;
use mathwhiz::gateway::{MockGateway, RecordedCall};
use mathwhiz::models::ChatRole;

async fn pump(app: &mut App) -> AppMessage {
    let message = app
        .message_rx
        .as_mut()
        .expect("receiver taken")
        .recv()
        .await
        .expect("completion channel closed");
    app.apply_message(message.clone());
    message
}

fn send(app: &mut App, text: &str) {
    app.state.tutor.input = text.to_string();
    app.apply_intent(Intent::SendChatMessage);
}

#[tokio::test]
async fn test_multi_turn_conversation_carries_transcript() {
    let mock = MockGateway::new();
    mock.push_reply(Ok("A limit describes approach, not arrival.".to_string()));
    mock.push_reply(Ok("Sure - consider f(x) = 1/x as x grows.".to_string()));
    let mut app = App::new(Arc::new(mock.clone()));

    send(&mut app, "What is a limit?");
    pump(&mut app).await;
    send(&mut app, "Can you give an example?");
    pump(&mut app).await;

    let transcript = &app.state.tutor.transcript;
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].role, ChatRole::User);
    assert_eq!(transcript[1].role, ChatRole::Assistant);
    assert_eq!(transcript[3].text, "Sure - consider f(x) = 1/x as x grows.");

    // The second call saw both earlier turns as prior context.
    assert_eq!(
        mock.calls(),
        vec![
            RecordedCall::Chat(0, "What is a limit?".to_string()),
            RecordedCall::Chat(2, "Can you give an example?".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_whitespace_only_input_changes_nothing() {
    let mock = MockGateway::new();
    let mut app = App::new(Arc::new(mock.clone()));

    for input in ["", "   ", " \t ", "\n"] {
        send(&mut app, input);
    }

    assert!(app.state.tutor.transcript.is_empty());
    assert!(!app.state.busy);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_failure_keeps_question_on_screen_for_resend() {
    let mock = MockGateway::new();
    mock.push_reply(Err(GatewayError::upstream("network unreachable")));
    mock.push_reply(Ok("Now I can hear you!".to_string()));
    let mut app = App::new(Arc::new(mock.clone()));

    send(&mut app, "Is 0.999... equal to 1?");
    pump(&mut app).await;

    // The user turn is visible and unanswered; no banner for chat failures.
    assert_eq!(app.state.tutor.transcript.len(), 1);
    assert_eq!(app.state.tutor.transcript[0].role, ChatRole::User);
    assert!(app.state.status.is_none());
    assert!(!app.state.busy);

    // Resending works.
    send(&mut app, "Is 0.999... equal to 1?");
    pump(&mut app).await;
    assert_eq!(app.state.tutor.transcript.len(), 3);
    assert_eq!(app.state.tutor.transcript[2].text, "Now I can hear you!");
}

#[tokio::test]
async fn test_empty_reply_is_replaced_with_fallback() {
    let mock = MockGateway::new();
    mock.push_reply(Ok(String::new()));
    let mut app = App::new(Arc::new(mock));

    send(&mut app, "hmm");
    pump(&mut app).await;

    assert_eq!(app.state.tutor.transcript[1].text, CHAT_FALLBACK_REPLY);
}

//! Contact form submission through the message loop

use std::time::Duration;

use tokio::sync::mpsc;

use folio::app::process::process_message;
use folio::app::{AppState, InputKey, Message, UiMode};
use folio::core::{ContactField, FieldError, SubmitStatus};

fn type_text(state: &mut AppState, tx: &mpsc::Sender<Message>, text: &str) {
    for c in text.chars() {
        process_message(state, Message::Key(InputKey::Char(c)), tx);
    }
}

#[tokio::test(start_paused = true)]
async fn test_submit_success_then_banner_clears() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_sample();

    process_message(&mut state, Message::OpenContactForm, &tx);
    assert_eq!(state.ui_mode, UiMode::ContactForm);

    type_text(&mut state, &tx, "Jo");
    process_message(&mut state, Message::Key(InputKey::Tab), &tx);
    type_text(&mut state, &tx, "jo@example.com");
    process_message(&mut state, Message::Key(InputKey::Tab), &tx);
    type_text(&mut state, &tx, "Hello there!");
    process_message(&mut state, Message::Key(InputKey::Enter), &tx);
    assert!(state.contact.submitting);

    let start = tokio::time::Instant::now();
    let submitted = rx.recv().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(
        submitted,
        Message::ContactSubmitted {
            outcome: SubmitStatus::Success
        }
    );

    process_message(&mut state, submitted, &tx);
    assert!(!state.contact.submitting);
    assert_eq!(state.contact.status, Some(SubmitStatus::Success));
    assert!(state.contact.form.message.is_empty());

    let clear = rx.recv().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(6000));
    process_message(&mut state, clear, &tx);
    assert_eq!(state.contact.status, None);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_sends_nothing() {
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_sample();

    process_message(&mut state, Message::OpenContactForm, &tx);
    process_message(&mut state, Message::Key(InputKey::Tab), &tx);
    type_text(&mut state, &tx, "not-an-email");
    process_message(&mut state, Message::Key(InputKey::Enter), &tx);

    assert!(!state.contact.submitting);
    assert_eq!(
        state.contact.errors.for_field(ContactField::Email),
        Some(FieldError::InvalidEmail)
    );
    assert_eq!(
        state.contact.errors.for_field(ContactField::Name),
        Some(FieldError::NameTooShort)
    );

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
}

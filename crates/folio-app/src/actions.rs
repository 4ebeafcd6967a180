//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use folio_core::prelude::Result;
use folio_core::{ContactForm, SubmitStatus};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::SubmitContact { form, delay } => {
            tokio::spawn(async move {
                let outcome = match deliver_contact_form(&form, delay).await {
                    Ok(()) => SubmitStatus::Success,
                    Err(e) => {
                        error!("Contact form delivery failed: {}", e);
                        SubmitStatus::Failed
                    }
                };
                if msg_tx
                    .send(Message::ContactSubmitted { outcome })
                    .await
                    .is_err()
                {
                    debug!("Event loop gone before contact submission finished");
                }
            });
        }

        UpdateAction::ScheduleStatusClear { token, after } => {
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                if msg_tx
                    .send(Message::ClearSubmitStatus { token })
                    .await
                    .is_err()
                {
                    debug!("Event loop gone before status banner cleared");
                }
            });
        }
    }
}

/// Simulated delivery: waits out `delay` and logs the payload.
///
/// There is no backend; the only failure is a payload that cannot be encoded.
pub async fn deliver_contact_form(form: &ContactForm, delay: Duration) -> Result<()> {
    tokio::time::sleep(delay).await;
    let payload = toml::to_string(form)?;
    info!("Form submitted:\n{}", payload);
    Ok(())
}

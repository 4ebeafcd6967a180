//! Contact form handlers

use folio_core::prelude::*;
use folio_core::{SectionId, SubmitStatus};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Focus the form and bring the Contact section into view
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::ContactForm;
    UpdateResult::message(Message::ScrollToSection(SectionId::Contact))
}

/// Validate and, if valid, hand the form to the event loop for delivery
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.contact.submitting {
        return UpdateResult::none();
    }

    match state.contact.begin_submit() {
        Some(form) => {
            debug!("Contact form valid, submitting");
            UpdateResult::action(UpdateAction::SubmitContact {
                form,
                delay: state.settings.contact.submit_delay(),
            })
        }
        None => {
            debug!(
                "Contact form rejected with {} field error(s)",
                state.contact.errors.len()
            );
            UpdateResult::none()
        }
    }
}

/// Show the submission outcome and schedule the banner to clear
pub fn handle_submitted(state: &mut AppState, outcome: SubmitStatus) -> UpdateResult {
    match outcome {
        SubmitStatus::Success => info!("Contact message sent"),
        SubmitStatus::Failed => warn!("Contact message failed to send"),
    }

    let token = state.contact.finish_submit(outcome);
    UpdateResult::action(UpdateAction::ScheduleStatusClear {
        token,
        after: state.settings.contact.status_display(),
    })
}

//! Contact form model and field validation.
//!
//! The form has no transport. Validation is the only behavior with rules:
//! every failing field produces its own inline error and none of them are
//! fatal to the rest of the page. [`ContactFormState`] holds the editing and
//! submission flow both front ends drive.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum name length, in characters
pub const MIN_NAME_LEN: usize = 2;

/// Minimum message length, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// Shape check for `local@domain.tld` addresses.
///
/// Leading dots and consecutive dots in the local part are rejected
/// separately in [`is_valid_email`].
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("Invalid email regex")
});

/// Check that `email` looks like a deliverable address
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Message => "Tell me about your project...",
        }
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    /// Field this error is displayed next to
    pub fn field(self) -> ContactField {
        match self {
            FieldError::NameTooShort => ContactField::Name,
            FieldError::InvalidEmail => ContactField::Email,
            FieldError::MessageTooShort => ContactField::Message,
        }
    }
}

/// All validation failures of one submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error shown next to `field`, if any
    pub fn for_field(&self, field: ContactField) -> Option<FieldError> {
        self.0.iter().copied().find(|e| e.field() == field)
    }

    /// Drop the error attached to `field` (e.g. once the user edits it)
    pub fn clear_field(&mut self, field: ContactField) {
        self.0.retain(|e| e.field() != field);
    }

    /// Replace the error shown for `field`, keeping tab order
    pub fn set_field(&mut self, field: ContactField, error: Option<FieldError>) {
        self.clear_field(field);
        if let Some(error) = error {
            self.0.push(error);
            self.0.sort_by_key(|e| e.field() as u8);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = ContactField::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Validate a single field
    pub fn validate_field(&self, field: ContactField) -> Option<FieldError> {
        match field {
            ContactField::Name if self.name.chars().count() < MIN_NAME_LEN => {
                Some(FieldError::NameTooShort)
            }
            ContactField::Email if !is_valid_email(&self.email) => Some(FieldError::InvalidEmail),
            ContactField::Message if self.message.chars().count() < MIN_MESSAGE_LEN => {
                Some(FieldError::MessageTooShort)
            }
            _ => None,
        }
    }

    /// Empty every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome banner shown after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failed,
}

impl SubmitStatus {
    pub fn message(self) -> &'static str {
        match self {
            SubmitStatus::Success => "Message sent successfully!",
            SubmitStatus::Failed => "Failed to send message. Please try again.",
        }
    }
}

/// Contact form fields plus submission state
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub focused: ContactField,
    pub errors: ValidationErrors,
    /// A submission is in flight; the submit button is disabled
    pub submitting: bool,
    /// Banner from the last completed submission
    pub status: Option<SubmitStatus>,
    /// Set by the first submit attempt; edits re-validate afterwards
    submit_attempted: bool,
    /// Identifies the current status banner so stale clear timers are ignored
    status_token: u64,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the focused field
    pub fn focused_value(&self) -> &str {
        self.form.field(self.focused)
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        self.form.field_mut(self.focused).push(c);
        self.revalidate(self.focused);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        self.form.field_mut(self.focused).pop();
        self.revalidate(self.focused);
    }

    /// Replace the whole value of `field`, as browser inputs report it
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.submitting {
            return;
        }
        *self.form.field_mut(field) = value;
        self.revalidate(field);
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Validate for submission.
    ///
    /// On success the form is marked in flight and a copy of its contents is
    /// returned. On failure every field error is shown and focus moves to the
    /// first invalid field.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        self.submit_attempted = true;

        match self.form.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.status = None;
                self.submitting = true;
                Some(self.form.clone())
            }
            Err(errors) => {
                if let Some(first) = errors.iter().next() {
                    self.focused = first.field();
                }
                self.errors = errors;
                None
            }
        }
    }

    /// Record the submission outcome and return the new banner token
    pub fn finish_submit(&mut self, outcome: SubmitStatus) -> u64 {
        self.submitting = false;
        self.status = Some(outcome);
        if outcome == SubmitStatus::Success {
            self.form.reset();
            self.errors = ValidationErrors::default();
            self.focused = ContactField::default();
            self.submit_attempted = false;
        }
        self.status_token += 1;
        self.status_token
    }

    /// Hide the banner if `token` still identifies it. Returns whether it did.
    pub fn clear_status(&mut self, token: u64) -> bool {
        if token != self.status_token || self.status.is_none() {
            return false;
        }
        self.status = None;
        true
    }

    fn revalidate(&mut self, field: ContactField) {
        if self.submit_attempted {
            let error = self.form.validate_field(field);
            self.errors.set_field(field, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("Jo", "jo@example.com", "Hello there")
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_name_length_boundary() {
        let mut form = valid();
        form.name = "J".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.for_field(ContactField::Name),
            Some(FieldError::NameTooShort)
        );

        form.name = "Jo".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let mut form = valid();
        form.name = "é".into();
        assert!(form.validate().is_err());
        form.name = "Zoë".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = valid();
        form.message = "123456789".into();
        assert_eq!(
            form.validate().unwrap_err().for_field(ContactField::Message),
            Some(FieldError::MessageTooShort)
        );

        form.message = "1234567890".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut form = valid();
        form.email = "jo.example.com".into();
        assert_eq!(
            form.validate().unwrap_err().for_field(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a.b+tag@mail.example.org"));
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jo@"));
        assert!(!is_valid_email("jo@example"));
        assert!(!is_valid_email(".jo@example.com"));
        assert!(!is_valid_email("j..o@example.com"));
        assert!(!is_valid_email("jo@example.c"));
        assert!(!is_valid_email("jo smith@example.com"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, ContactField::ALL.to_vec());
    }

    #[test]
    fn test_clear_field_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear_field(ContactField::Email);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field(ContactField::Email), None);
    }

    #[test]
    fn test_set_field_keeps_tab_order() {
        let mut errors = ValidationErrors::default();
        errors.set_field(ContactField::Message, Some(FieldError::MessageTooShort));
        errors.set_field(ContactField::Name, Some(FieldError::NameTooShort));
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec![ContactField::Name, ContactField::Message]);

        errors.set_field(ContactField::Name, None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_field_matches_full_validation() {
        let form = ContactForm::new("J", "jo@example.com", "short");
        assert_eq!(
            form.validate_field(ContactField::Name),
            Some(FieldError::NameTooShort)
        );
        assert_eq!(form.validate_field(ContactField::Email), None);
        assert_eq!(
            form.validate_field(ContactField::Message),
            Some(FieldError::MessageTooShort)
        );
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email"
        );
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_field_cycle() {
        let mut field = ContactField::Name;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = valid();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
        let mut state = ContactFormState::new();
        state.form = ContactForm::new(name, email, message);
        state
    }

    #[test]
    fn test_begin_submit_rejects_invalid_form() {
        let mut contact = filled("Jo", "not-an-email", "Hello there");
        assert!(contact.begin_submit().is_none());
        assert!(!contact.submitting);
        assert_eq!(contact.focused, ContactField::Email);
        assert_eq!(
            contact.errors.for_field(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_begin_submit_marks_in_flight() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        let form = contact.begin_submit().unwrap();
        assert_eq!(form.name, "Jo");
        assert!(contact.submitting);

        // Second submit while in flight is ignored
        assert!(contact.begin_submit().is_none());
    }

    #[test]
    fn test_edits_revalidate_after_first_attempt() {
        let mut contact = filled("", "jo@example.com", "Hello there");

        // Before any attempt, typing shows nothing
        contact.insert_char('J');
        assert!(contact.errors.is_empty());

        contact.begin_submit();
        assert_eq!(
            contact.errors.for_field(ContactField::Name),
            Some(FieldError::NameTooShort)
        );

        contact.focused = ContactField::Name;
        contact.insert_char('o');
        assert!(contact.errors.is_empty());

        contact.backspace();
        assert_eq!(
            contact.errors.for_field(ContactField::Name),
            Some(FieldError::NameTooShort)
        );
    }

    #[test]
    fn test_input_ignored_while_submitting() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        contact.begin_submit();
        contact.insert_char('x');
        contact.backspace();
        assert_eq!(contact.form.name, "Jo");
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        contact.focused = ContactField::Message;
        contact.begin_submit();

        contact.finish_submit(SubmitStatus::Success);

        assert!(!contact.submitting);
        assert_eq!(contact.form, ContactForm::default());
        assert_eq!(contact.focused, ContactField::Name);
        assert_eq!(contact.status, Some(SubmitStatus::Success));
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        contact.begin_submit();

        contact.finish_submit(SubmitStatus::Failed);

        assert_eq!(contact.form.name, "Jo");
        assert_eq!(contact.status, Some(SubmitStatus::Failed));
    }

    #[test]
    fn test_stale_status_token_is_ignored() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        contact.begin_submit();
        let first = contact.finish_submit(SubmitStatus::Failed);
        contact.begin_submit();
        let second = contact.finish_submit(SubmitStatus::Success);

        assert!(!contact.clear_status(first));
        assert_eq!(contact.status, Some(SubmitStatus::Success));
        assert!(contact.clear_status(second));
        assert_eq!(contact.status, None);
    }

    #[test]
    fn test_set_field_replaces_value_and_revalidates() {
        let mut contact = filled("J", "jo@example.com", "Hello there");
        contact.set_field(ContactField::Message, "Still hello".into());
        assert!(contact.errors.is_empty());

        assert!(contact.begin_submit().is_none());
        contact.set_field(ContactField::Email, "nope".into());
        assert_eq!(contact.form.email, "nope");
        assert_eq!(
            contact.errors.for_field(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );

        contact.set_field(ContactField::Email, "jo@example.com".into());
        contact.set_field(ContactField::Name, "Jo".into());
        assert!(contact.errors.is_empty());
        assert!(!contact.submitting);
    }

    #[test]
    fn test_set_field_ignored_while_submitting() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        contact.begin_submit();
        contact.set_field(ContactField::Name, "Someone else".into());
        assert_eq!(contact.form.name, "Jo");
    }

    #[test]
    fn test_failed_delivery_unlocks_form_and_banner_clears() {
        let mut contact = filled("Jo", "jo@example.com", "Hello there");
        assert!(contact.begin_submit().is_some());

        let token = contact.finish_submit(SubmitStatus::Failed);
        assert!(!contact.submitting);

        // Editable again, and a retry goes through
        contact.set_field(ContactField::Name, "Joe".into());
        assert_eq!(contact.form.name, "Joe");
        assert!(contact.clear_status(token));
        assert_eq!(contact.status, None);
        assert!(contact.begin_submit().is_some());
    }
}

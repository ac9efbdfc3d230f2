//! Contact form stub. Submissions go to a [`MessageSink`]; the shipped sink
//! only logs them, and a real delivery path is left to whoever hosts the
//! site.

use crate::telemetry::Logger;
use serde::Serialize;
use serde_json::json;

pub const SENT_CONFIRMATION_MS: u32 = 3_000;
pub const SENT_LABEL: &str = "Message Sent!";
pub const SUBMIT_LABEL: &str = "Send Message";
const SENT_STYLE: &str = "background: #10b981;";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub trait MessageSink {
    fn deliver(&self, message: &ContactMessage);
}

pub struct LogSink {
    logger: Logger,
}

impl LogSink {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

pub const CAPTURED_EVENT: &str = "contact_message_captured";

impl LogSink {
    fn event_fields(message: &ContactMessage) -> serde_json::Value {
        json!({ "message": message })
    }
}

impl MessageSink for LogSink {
    fn deliver(&self, message: &ContactMessage) {
        self.logger.info(CAPTURED_EVENT, Self::event_fields(message));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitButton {
    #[default]
    Ready,
    Sent,
}

impl SubmitButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => SUBMIT_LABEL,
            Self::Sent => SENT_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn style(self) -> Option<&'static str> {
        match self {
            Self::Ready => None,
            Self::Sent => Some(SENT_STYLE),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub button: SubmitButton,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Hands the fields to `sink`, clears the form and flips the button to
    /// its confirmation state.
    pub fn submit(&mut self, sink: &dyn MessageSink) {
        let message = std::mem::take(&mut self.fields);
        sink.deliver(&message);
        self.button = SubmitButton::Sent;
    }

    /// Called once [`SENT_CONFIRMATION_MS`] has passed.
    pub fn restore_button(&mut self) {
        self.button = SubmitButton::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<ContactMessage>>,
    }

    impl MessageSink for RecordingSink {
        fn deliver(&self, message: &ContactMessage) {
            self.received.borrow_mut().push(message.clone());
        }
    }

    #[test]
    fn submit_hands_fields_to_the_sink_and_resets_the_form() {
        let sink = RecordingSink::default();
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".to_string());
        form.set(ContactField::Email, "ada@example.com".to_string());
        form.set(ContactField::Message, "Hello".to_string());

        form.submit(&sink);

        assert_eq!(
            sink.received.borrow().as_slice(),
            [ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }]
        );
        assert_eq!(form.fields, ContactMessage::default());
        assert_eq!(form.button, SubmitButton::Sent);
    }

    #[test]
    fn confirmation_disables_then_restores_the_button() {
        let mut form = ContactForm::default();
        form.submit(&RecordingSink::default());

        assert!(form.button.disabled());
        assert_eq!(form.button.label(), SENT_LABEL);
        assert!(form.button.style().is_some());

        form.restore_button();
        assert!(!form.button.disabled());
        assert_eq!(form.button.label(), SUBMIT_LABEL);
        assert_eq!(form.button.style(), None);
    }

    #[test]
    fn log_sink_records_every_field_of_the_message() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let fields = LogSink::event_fields(&message);

        assert_eq!(fields["message"]["name"], "Ada");
        assert_eq!(fields["message"]["email"], "ada@example.com");
        assert_eq!(fields["message"]["message"], "Hello");
    }
}

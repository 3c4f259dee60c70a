//! Contact form state, validation and submission lifecycle.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::{Command, Commands, Controller, TimerKey};

pub const SUBMIT_TIMER: TimerKey = "submit";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

/// Check every field, returning one message per offending field.
pub fn validate(fields: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, "Please enter a valid email".to_string());
    }

    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required".to_string());
    }

    errors
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("the server rejected the message (status {0})")]
    Rejected(u16),
    #[error("could not encode the message: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// How a valid message leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Wait `delay_ms`, then report success.
    Simulated { delay_ms: u32 },
    /// Hand the message to the host, which reports back.
    Remote,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetField(Field, String),
    Submit,
    Delivered,
    DeliveryFailed(SubmitError),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutput {
    Deliver(ContactMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    errors: FieldErrors,
    status: SubmitStatus,
    delivery: Delivery,
}

impl ContactForm {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            fields: ContactMessage::default(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            delivery,
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.status, SubmitStatus::Idle | SubmitStatus::Failed(_))
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
        self.errors.remove(&field);
    }

    fn submit(&mut self) -> Commands<Self> {
        if !self.can_submit() {
            debug!(status = ?self.status, "submit dropped");
            return Vec::new();
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return Vec::new();
        }

        self.errors.clear();
        self.status = SubmitStatus::Submitting;
        match self.delivery {
            Delivery::Simulated { delay_ms } => {
                vec![Command::once(SUBMIT_TIMER, delay_ms, FormEvent::Delivered)]
            }
            Delivery::Remote => vec![Command::Emit(FormOutput::Deliver(self.fields.clone()))],
        }
    }

    fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != SubmitStatus::Submitting {
            debug!(status = ?self.status, "delivery result without a submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                self.fields = ContactMessage::default();
            }
            Err(err) => {
                warn!(%err, "contact message was not delivered");
                self.status = SubmitStatus::Failed(err.to_string());
            }
        }
    }

    fn reset(&mut self) {
        if matches!(self.status, SubmitStatus::Submitted | SubmitStatus::Failed(_)) {
            self.fields = ContactMessage::default();
            self.errors.clear();
            self.status = SubmitStatus::Idle;
        }
    }
}

impl Controller for ContactForm {
    type Event = FormEvent;
    type Output = FormOutput;

    fn handle(&mut self, event: FormEvent) -> Commands<Self> {
        match event {
            FormEvent::SetField(field, value) => self.set_field(field, value),
            FormEvent::Submit => return self.submit(),
            FormEvent::Delivered => self.finish(Ok(())),
            FormEvent::DeliveryFailed(err) => self.finish(Err(err)),
            FormEvent::Reset => self.reset(),
        }
        Vec::new()
    }

    fn unmount(&mut self) -> Commands<Self> {
        vec![Command::Cancel(SUBMIT_TIMER)]
    }
}

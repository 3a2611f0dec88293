use std::time::{Duration, Instant};

use async_trait::async_trait;
use folio_contact::{SubmissionRequest, SubmissionResult};

use crate::ClientError;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    fn to_request(&self) -> SubmissionRequest {
        SubmissionRequest::new(
            self.name.clone(),
            self.email.clone(),
            self.subject.clone(),
            self.message.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

/// Sends one submission to the contact endpoint.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ClientError>;
}

/// Contact form state.
///
/// `Idle -> Submitting -> Success | Error -> Idle`. A success or error
/// status is shown until it expires or any field is edited. Inputs are
/// disabled while a submission is in flight.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
    expires_at: Option<Instant>,
    display_for: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            status: FormStatus::Idle,
            expires_at: None,
            display_for: STATUS_DISPLAY_DURATION,
        }
    }

    pub fn with_display_duration(mut self, display_for: Duration) -> Self {
        self.display_for = display_for;
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Returns `false` when the form is disabled and the edit was ignored.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_disabled() {
            return false;
        }

        *self.fields.slot(field) = value.into();

        if self.status != FormStatus::Idle {
            self.clear_status();
        }

        true
    }

    /// Moves to `Submitting` and snapshots the current field values.
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, ClientError> {
        if self.is_disabled() {
            return Err(ClientError::Busy);
        }

        self.status = FormStatus::Submitting;
        self.expires_at = None;

        Ok(self.fields.to_request())
    }

    /// Applies the endpoint's answer to an in-flight submission.
    pub fn finish_submit(
        &mut self,
        response: Result<SubmissionResult, ClientError>,
        now: Instant,
    ) {
        self.status = match response {
            Ok(result) if result.is_accepted() => {
                self.fields = FormFields::default();
                FormStatus::Success(non_empty_or(result.message, DEFAULT_SUCCESS_MESSAGE))
            }
            Ok(result) => FormStatus::Error(non_empty_or(result.message, DEFAULT_ERROR_MESSAGE)),
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                FormStatus::Error(DEFAULT_ERROR_MESSAGE.to_owned())
            }
        };
        self.expires_at = Some(now + self.display_for);
    }

    /// Clears an expired success or error status.
    pub fn tick(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|at| now >= at) {
            self.clear_status();
        }
    }

    /// Full round trip: one request, no retries.
    pub async fn submit(
        &mut self,
        submitter: &dyn ContactSubmitter,
    ) -> Result<&FormStatus, ClientError> {
        let request = self.begin_submit()?;
        let response = submitter.submit(&request).await;
        self.finish_submit(response, Instant::now());

        Ok(&self.status)
    }

    fn clear_status(&mut self) {
        self.status = FormStatus::Idle;
        self.expires_at = None;
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}

use std::time::Duration;

use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl ContactError {
    /// True for failures caused by the submitted data itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ContactError::MissingFields | ContactError::InvalidEmail)
    }

    /// Text that is safe to show to the submitter.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields => MISSING_FIELDS_MESSAGE,
            ContactError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            _ => DELIVERY_FAILED_MESSAGE,
        }
    }
}

/// Failure reported by an email delivery provider.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Invalid address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build email message: {0}")]
    Build(String),

    #[error("Provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

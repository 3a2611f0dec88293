use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ContactError;

/// Loose `local@domain.tld` shape. Not RFC 5322 on purpose.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Contact form payload as it arrives on the wire.
///
/// Every field is optional so that a missing key is reported as a
/// validation failure rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Submission {
    pub name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Checks presence first, then the address shape.
    pub fn validate(self) -> Result<Submission, ContactError> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            present(self.name),
            present(self.email),
            present(self.subject),
            present(self.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        let submission = Submission {
            name,
            email,
            subject,
            message,
        };

        Validate::validate(&submission).map_err(|_| ContactError::InvalidEmail)?;

        Ok(submission)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

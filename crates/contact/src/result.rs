use serde::{Deserialize, Serialize};

use crate::{ContactError, DeliveryReceipt};

pub const ACCEPTED_MESSAGE: &str = "Email sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

/// Outcome of one submission as reported back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub outcome: Outcome,
    pub message: String,
    pub delivery_id: Option<String>,
}

impl SubmissionResult {
    pub fn accepted(message: impl Into<String>, delivery_id: Option<String>) -> Self {
        Self {
            outcome: Outcome::Accepted,
            message: message.into(),
            delivery_id,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Rejected,
            message: message.into(),
            delivery_id: None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    /// Wire body: `{message, emailId?}` when accepted, `{error}` otherwise.
    pub fn to_body(&self) -> ResponseBody {
        match self.outcome {
            Outcome::Accepted => ResponseBody {
                message: Some(self.message.clone()),
                error: None,
                email_id: self.delivery_id.clone(),
            },
            Outcome::Rejected => ResponseBody {
                message: None,
                error: Some(self.message.clone()),
                email_id: None,
            },
        }
    }
}

impl From<DeliveryReceipt> for SubmissionResult {
    fn from(receipt: DeliveryReceipt) -> Self {
        SubmissionResult::accepted(ACCEPTED_MESSAGE, receipt.id)
    }
}

impl From<&ContactError> for SubmissionResult {
    fn from(err: &ContactError) -> Self {
        SubmissionResult::rejected(err.public_message())
    }
}

/// JSON body exchanged between the form and the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

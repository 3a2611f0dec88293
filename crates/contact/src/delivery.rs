use async_trait::async_trait;

use crate::DeliveryError;

/// A fully rendered notification ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// What a provider reports back after accepting a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider-specific message identifier, when one is returned.
    pub id: Option<String>,
}

impl DeliveryReceipt {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Capability to transmit an email.
///
/// Implemented by every provider (SMTP relay, HTTP API, log only) and by
/// test doubles.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError>;
}

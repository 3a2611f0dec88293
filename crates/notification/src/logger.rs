use async_trait::async_trait;
use folio_contact::{DeliveryError, DeliveryReceipt, EmailDelivery, OutgoingEmail};

/// Writes the notification to the log instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDelivery;

#[async_trait]
impl EmailDelivery for LogDelivery {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        tracing::info!(
            to = %email.to,
            from = %email.from,
            reply_to = email.reply_to.as_deref().unwrap_or("-"),
            subject = %email.subject,
            "Email would be sent (log provider)"
        );
        tracing::debug!(body = %email.text, "Email plain text body");

        Ok(DeliveryReceipt::default())
    }
}

use std::{sync::Arc, time::Duration};

use crate::{
    ContactError, DeliveryReceipt, EmailDelivery, Notification, OutgoingEmail, SubmissionRequest,
};

pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Handles contact form submissions.
///
/// Stateless between calls; cloning shares the injected provider.
#[derive(Clone)]
pub struct ContactService {
    delivery: Arc<dyn EmailDelivery>,
    from: String,
    to: String,
    timeout: Duration,
}

impl ContactService {
    /// `from` is the fixed sender identity, `to` the address every
    /// notification goes to.
    pub fn new(
        delivery: Arc<dyn EmailDelivery>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            delivery,
            from: from.into(),
            to: to.into(),
            timeout: DEFAULT_DELIVERY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the request and makes at most one delivery attempt.
    #[tracing::instrument(
        skip_all,
        fields(provider = self.delivery.name(), subject = tracing::field::Empty)
    )]
    pub async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<DeliveryReceipt, ContactError> {
        let submission = match request.validate() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::info!(reason = %e, "Contact submission rejected");
                return Err(e);
            }
        };

        tracing::Span::current().record("subject", submission.subject.as_str());

        let notification = Notification::render(&submission)?;

        let email = OutgoingEmail {
            from: self.from.to_owned(),
            to: self.to.to_owned(),
            reply_to: Some(submission.email),
            subject: notification.subject,
            html: notification.html,
            text: notification.text,
        };

        let receipt = tokio::time::timeout(self.timeout, self.delivery.send(&email))
            .await
            .map_err(|_| ContactError::Timeout(self.timeout))??;

        tracing::info!(
            delivery_id = receipt.id.as_deref().unwrap_or("-"),
            "Contact notification delivered"
        );

        Ok(receipt)
    }
}

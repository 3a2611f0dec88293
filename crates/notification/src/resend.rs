//! Delivery through the Resend HTTP API

use async_trait::async_trait;
use folio_contact::{DeliveryError, DeliveryReceipt, EmailDelivery, OutgoingEmail};
use serde::{Deserialize, Serialize};

use crate::EmailConfig;

#[derive(Clone)]
pub struct ResendDelivery {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

impl ResendDelivery {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !config.resend_api_key.is_empty(),
            "Resend API key is not configured"
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: config.resend_api_key.clone(),
            endpoint: format!("{}/emails", config.resend_base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl EmailDelivery for ResendDelivery {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let body = SendEmailRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_deref(),
        };

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email through Resend");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::Transport(format!("malformed provider response: {e}")))?;

        Ok(DeliveryReceipt { id: parsed.id })
    }
}

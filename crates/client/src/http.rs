use std::time::Duration;

use async_trait::async_trait;
use folio_contact::{ResponseBody, SubmissionRequest, SubmissionResult};

use crate::{ClientError, ContactSubmitter};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts submissions as JSON to the contact endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ClientError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let success = response.status().is_success();

        // An unreadable body still tells us the outcome through the status.
        let body: ResponseBody = response.json().await.unwrap_or_default();

        Ok(if success {
            SubmissionResult::accepted(body.message.unwrap_or_default(), body.email_id)
        } else {
            SubmissionResult::rejected(body.error.unwrap_or_default())
        })
    }
}

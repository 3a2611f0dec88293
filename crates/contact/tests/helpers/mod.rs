use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio_contact::{ContactService, DeliveryError, DeliveryReceipt, EmailDelivery, OutgoingEmail};

pub const FROM: &str = "portfolio@folio.localhost";
pub const TO: &str = "owner@folio.localhost";

/// Records every email and answers with a fixed result.
pub struct FakeDelivery {
    sent: Mutex<Vec<OutgoingEmail>>,
    answer: Answer,
}

enum Answer {
    Id(Option<String>),
    Fail,
    Hang,
}

#[allow(dead_code)]
impl FakeDelivery {
    pub fn accepting(id: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            answer: Answer::Id(id.map(str::to_owned)),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            answer: Answer::Fail,
        })
    }

    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            answer: Answer::Hang,
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for FakeDelivery {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(email.clone());

        match &self.answer {
            Answer::Id(id) => Ok(DeliveryReceipt { id: id.clone() }),
            Answer::Fail => Err(DeliveryError::Rejected {
                status: 422,
                body: "domain not verified: secret-internal-detail".to_string(),
            }),
            Answer::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(DeliveryReceipt::default())
            }
        }
    }
}

pub fn service(delivery: Arc<FakeDelivery>) -> ContactService {
    ContactService::new(delivery, FROM, TO)
}

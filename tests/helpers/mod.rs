//! Test helpers: a recording email provider and a router wired to it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use folio::routes::{AppState, router};
use folio_contact::{ContactService, DeliveryError, DeliveryReceipt, EmailDelivery, OutgoingEmail};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const FROM: &str = "Portfolio <portfolio@folio.localhost>";
pub const TO: &str = "owner@folio.localhost";

/// Records every email; fails when built with `failing`.
pub struct RecordingDelivery {
    sent: Mutex<Vec<OutgoingEmail>>,
    id: Option<String>,
    fail: bool,
}

impl RecordingDelivery {
    pub fn accepting(id: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            id: id.map(str::to_owned),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            id: None,
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            return Err(DeliveryError::Transport(
                "smtp.internal:587 refused connection".to_string(),
            ));
        }

        Ok(DeliveryReceipt {
            id: self.id.clone(),
        })
    }
}

pub fn app(delivery: Arc<RecordingDelivery>) -> Router {
    router(AppState {
        contact: ContactService::new(delivery, FROM, TO),
    })
}

pub fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn post_without_content_type(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (u16, Value) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

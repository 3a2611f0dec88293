use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::{ContactError, DELIVERY_FAILED_MESSAGE, SubmissionResult};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, result) = match &self {
            AppError::Contact(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, SubmissionResult::from(e))
            }
            AppError::Contact(e) => {
                tracing::error!(error = %e, "Contact form delivery failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SubmissionResult::from(e))
            }
            AppError::MalformedBody(e) => {
                tracing::error!(error = %e, "Contact form body could not be parsed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmissionResult::rejected(DELIVERY_FAILED_MESSAGE),
                )
            }
        };

        (status_code, Json(result.to_body())).into_response()
    }
}

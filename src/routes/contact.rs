use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use folio_contact::{ResponseBody, SubmissionRequest, SubmissionResult};

use crate::{error::AppError, routes::AppState};

/// POST /api/contact
///
/// The body is parsed as JSON whatever `Content-Type` the browser sent.
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResponseBody>, AppError> {
    let request: SubmissionRequest = serde_json::from_slice(&body)?;

    let receipt = app_state.contact.submit(request).await?;

    Ok(Json(SubmissionResult::from(receipt).to_body()))
}

/// OPTIONS /api/contact
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

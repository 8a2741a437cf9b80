use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use msru_content::InquiryRepo;
use msru_core::models::InquiryForm;

use crate::error::AppResult;
use crate::middleware::lifecycle::Serving;
use crate::response::{DataResponse, SubmissionResult};
use crate::state::AppState;

/// POST /api/v1/inquiries
///
/// 201 when stored, 400 for an unreadable or invalid form, 502 when the
/// content service rejected the insert.
pub async fn submit_inquiry(
    _ready: Serving,
    State(state): State<AppState>,
    payload: Result<Json<InquiryForm>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(form) = payload?;
    form.check()?;

    let submitted = InquiryRepo::submit_inquiry(state.content.as_ref(), &form).await;
    let status = if submitted {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_GATEWAY
    };

    Ok((status, Json(DataResponse { data: SubmissionResult { submitted } })))
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use msru_content::ContentError;
use msru_core::error::CoreError;
use msru_core::lifecycle::Lifecycle;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`ContentError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{error, code}` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `msru_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-layer error from `msru_content`.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Content is not served yet because startup has not finished.
    #[error("Service is {}", .0.as_str())]
    Unavailable(Lifecycle),

    /// A request body that could not be read as the expected JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Content(content) => match content {
                ContentError::Core(core) => classify_core_error(core),
                ContentError::Remote(err) => {
                    tracing::error!(error = %err, "Content service error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The content service request failed".to_string(),
                    )
                }
                ContentError::Encode(err) => internal(&err.to_string()),
            },

            AppError::Unavailable(state) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                format!("Service is {}", state.as_str()),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, slug } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with slug {slug} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Internal(msg) => internal(msg),
    }
}

/// Log the detail and return a sanitized 500.
fn internal(detail: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %detail, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

//! Startup gate for content routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use msru_core::lifecycle::Lifecycle;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that startup has settled and content may be served.
///
/// Add it as a handler parameter; while the bootstrap is still running the
/// request is rejected with 503. A failed bootstrap still serves.
///
/// ```ignore
/// async fn my_handler(_ready: Serving, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Serving(pub Lifecycle);

impl FromRequestParts<AppState> for Serving {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = state.lifecycle.current();
        if current.is_serving() {
            Ok(Serving(current))
        } else {
            Err(AppError::Unavailable(current))
        }
    }
}

use axum::routing::post;
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Inquiry routes mounted at `/inquiries`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(inquiries::submit_inquiry))
}

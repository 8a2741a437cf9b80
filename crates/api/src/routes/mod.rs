pub mod articles;
pub mod health;
pub mod inquiries;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                 published projects, newest first (GET)
/// /projects/featured        featured projects (GET)
/// /projects/{slug}          one project by slug (GET)
/// /articles                 journal articles (GET)
/// /inquiries                submit a contact inquiry (POST)
/// ```
///
/// Every route answers 503 until startup has settled.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/articles", articles::router())
        .nest("/inquiries", inquiries::router())
}

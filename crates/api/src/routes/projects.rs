use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET /            -> list_projects
/// GET /featured    -> list_featured
/// GET /{slug}      -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/featured", get(projects::list_featured))
        .route("/{slug}", get(projects::get_project))
}

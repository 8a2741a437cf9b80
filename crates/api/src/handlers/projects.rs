//! Handlers for portfolio projects.
//!
//! Reads go through the collapsing repository methods: a content-service
//! failure yields the same empty list (or 404) as an empty collection.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use msru_content::ProjectRepo;
use msru_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::lifecycle::Serving;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/featured
pub async fn list_featured(
    _ready: Serving,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::get_featured_projects(state.content.as_ref()).await;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects
///
/// All published projects, newest first.
pub async fn list_projects(
    _ready: Serving,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::get_all_projects(state.content.as_ref()).await;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{slug}
pub async fn get_project(
    _ready: Serving,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::get_project_by_slug(state.content.as_ref(), &slug)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            slug,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

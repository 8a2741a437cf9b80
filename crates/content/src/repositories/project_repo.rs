//! Reads from the `projects` collection.

use msru_core::models::{Project, ProjectStatus};
use msru_core::normalize::project_from_raw;
use msru_core::raw::RawProject;
use msru_directus::{ContentApi, Filter, ItemQuery};
use serde_json::Value;

use crate::error::ContentError;
use crate::repositories::decode_rows;
use crate::schema::PROJECTS;

/// Provides read access to published projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Published projects flagged as featured, in service order.
    pub async fn get_featured_projects(api: &dyn ContentApi) -> Vec<Project> {
        Self::try_featured(api).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch featured projects");
            Vec::new()
        })
    }

    /// All published projects, newest first.
    pub async fn get_all_projects(api: &dyn ContentApi) -> Vec<Project> {
        Self::try_all(api).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch projects");
            Vec::new()
        })
    }

    /// The published project with `slug`, or `None` when there is none
    /// or the fetch failed.
    pub async fn get_project_by_slug(api: &dyn ContentApi, slug: &str) -> Option<Project> {
        Self::try_by_slug(api, slug).await.unwrap_or_else(|e| {
            tracing::error!(slug, error = %e, "Failed to fetch project");
            None
        })
    }

    pub async fn try_featured(api: &dyn ContentApi) -> Result<Vec<Project>, ContentError> {
        let query = ItemQuery::new()
            .filter(Filter::and([
                published(),
                Filter::eq("is_featured", true),
            ]))
            .all_fields();
        let rows = api.read_items(PROJECTS, &query).await?;
        Ok(map_projects(api, rows))
    }

    pub async fn try_all(api: &dyn ContentApi) -> Result<Vec<Project>, ContentError> {
        let query = ItemQuery::new()
            .filter(published())
            .sort("-publish_date")
            .all_fields();
        let rows = api.read_items(PROJECTS, &query).await?;
        Ok(map_projects(api, rows))
    }

    pub async fn try_by_slug(
        api: &dyn ContentApi,
        slug: &str,
    ) -> Result<Option<Project>, ContentError> {
        let query = ItemQuery::new()
            .filter(Filter::and([Filter::eq("slug", slug), published()]))
            .limit(1)
            .all_fields();
        let rows = api.read_items(PROJECTS, &query).await?;
        Ok(map_projects(api, rows).into_iter().next())
    }
}

fn published() -> Filter {
    Filter::eq("status", ProjectStatus::Published.as_str())
}

fn map_projects(api: &dyn ContentApi, rows: Vec<Value>) -> Vec<Project> {
    decode_rows::<RawProject>(PROJECTS, rows)
        .into_iter()
        .map(|raw| project_from_raw(raw, |id| api.asset_url(id)))
        .collect()
}

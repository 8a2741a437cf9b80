//! Schema bootstrap and baseline seeding.
//!
//! Runs once at startup, before pages are served:
//!
//! 1. List existing collections.
//! 2. Create each required collection that is missing.
//! 3. Attempt to create every declared field of every required collection.
//!    Rejections (usually "field already exists") are ignored: this is a
//!    repair pass, so a field added to a definition later still lands on
//!    collections created by an older build.
//! 4. Seed `projects` if it is empty.
//! 5. Seed `articles` if it is empty.
//!
//! Steps 1-2 failing fails the bootstrap. A seeding failure is logged and
//! the remaining steps still run. Nothing is rolled back; the next run
//! re-evaluates every step against the current remote state, so repeated
//! runs never duplicate collections or seed records.

use msru_core::seed::{baseline_articles, baseline_projects};
use msru_directus::{ContentApi, ItemQuery};
use serde::Serialize;
use serde_json::Value;

use crate::error::ContentError;
use crate::schema::{site_collections, ARTICLES, PROJECTS};

/// What a bootstrap run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// Collections created during this run.
    pub collections_created: Vec<String>,
    /// Field creations that were accepted.
    pub fields_created: usize,
    /// Field creations that were rejected and skipped.
    pub fields_skipped: usize,
    /// Seed records inserted into `projects`.
    pub projects_seeded: usize,
    /// Seed records inserted into `articles`.
    pub articles_seeded: usize,
}

/// Run the bootstrap, reporting only success or failure.
///
/// Never returns an error: a failure is logged and reported as `false`.
pub async fn bootstrap(api: &dyn ContentApi) -> bool {
    tracing::info!("Starting CMS bootstrap");

    match try_bootstrap(api).await {
        Ok(report) => {
            tracing::info!(
                collections_created = report.collections_created.len(),
                fields_created = report.fields_created,
                fields_skipped = report.fields_skipped,
                projects_seeded = report.projects_seeded,
                articles_seeded = report.articles_seeded,
                "CMS bootstrap complete"
            );
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "CMS bootstrap failed");
            false
        }
    }
}

/// Run the bootstrap and return what it changed.
///
/// Fails only when listing or creating collections fails.
pub async fn try_bootstrap(api: &dyn ContentApi) -> Result<BootstrapReport, ContentError> {
    let mut report = BootstrapReport::default();
    let existing = api.list_collections().await?;

    for definition in site_collections() {
        let name = definition.collection.as_str();

        if !existing.iter().any(|c| c == name) {
            tracing::info!(collection = name, "Creating collection");
            api.create_collection(&definition).await?;
            report.collections_created.push(name.to_string());
        }

        for field in &definition.fields {
            match api.create_field(name, field).await {
                Ok(()) => report.fields_created += 1,
                // 400 means the field already exists; anything else is worth a look.
                Err(e) if e.status() == Some(400) => {
                    tracing::debug!(collection = name, field = %field.field, "Field already present");
                    report.fields_skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        collection = name,
                        field = %field.field,
                        error = %e,
                        "Field not created"
                    );
                    report.fields_skipped += 1;
                }
            }
        }
    }

    let projects = to_payloads(baseline_projects())?;
    report.projects_seeded = seed_if_empty(api, PROJECTS, &projects).await;

    let articles = to_payloads(baseline_articles())?;
    report.articles_seeded = seed_if_empty(api, ARTICLES, &articles).await;

    Ok(report)
}

/// Insert `records` into `collection` if it currently has no items.
///
/// Returns the number inserted. Stops at the first failed insert.
async fn seed_if_empty(api: &dyn ContentApi, collection: &str, records: &[Value]) -> usize {
    let existing = match api
        .read_items(collection, &ItemQuery::new().limit(1))
        .await
    {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(collection, error = %e, "Skipping seeding, collection not readable");
            return 0;
        }
    };

    if !existing.is_empty() {
        return 0;
    }

    tracing::info!(collection, count = records.len(), "Seeding collection");
    let mut inserted = 0;
    for record in records {
        if let Err(e) = api.create_item(collection, record).await {
            tracing::warn!(collection, error = %e, inserted, "Seeding stopped");
            break;
        }
        inserted += 1;
    }
    inserted
}

fn to_payloads<T: Serialize>(records: Vec<T>) -> Result<Vec<Value>, ContentError> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).map_err(ContentError::from))
        .collect()
}

//! Mapping from raw service records to the shapes pages render.
//!
//! Every function here is total: any input the service can produce maps to
//! a display value, falling back to a fixed label when the field is missing
//! or has an unexpected shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::{Article, ArticleType, Project, ProjectStatus};
use crate::raw::{RawArticle, RawAuthor, RawCategory, RawProject, RawTags};
use crate::types::Timestamp;

/// Category shown when a project has none or it cannot be resolved.
pub const DEFAULT_CATEGORY: &str = "General";

/// Author shown when an expanded user record has no first name.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Author shown when the author field is not an expanded user record.
pub const TEAM_AUTHOR: &str = "MSRU Team";

/// Naive date-time layouts the service emits for `dateTime` fields.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Resolve a category to its display label.
pub fn normalize_category(raw: Option<&RawCategory>) -> String {
    match raw {
        Some(RawCategory::Relation { name: Some(name) }) if !name.is_empty() => name.clone(),
        Some(RawCategory::Label(label)) => label.clone(),
        Some(RawCategory::Relation { .. }) | Some(RawCategory::Other(_)) | None => {
            DEFAULT_CATEGORY.to_string()
        }
    }
}

/// Resolve tags to an ordered list of strings.
///
/// Arrays are kept in order. Strings and other scalars are split on commas,
/// with each segment trimmed and empty segments dropped. Falsy scalars
/// (`null`, `false`, `0`) carry no tags.
pub fn normalize_tags(raw: Option<&RawTags>) -> Vec<String> {
    match raw {
        Some(RawTags::List(items)) => items.iter().map(scalar_to_string).collect(),
        Some(RawTags::Text(text)) => split_tags(text),
        Some(RawTags::Other(other)) if is_falsy(other) => Vec::new(),
        Some(RawTags::Other(other)) => split_tags(&scalar_to_string(other)),
        None => Vec::new(),
    }
}

/// Resolve an article author to a display name.
pub fn normalize_author(raw: Option<&RawAuthor>) -> String {
    match raw {
        Some(RawAuthor::Relation {
            first_name: Some(name),
        }) if !name.is_empty() => name.clone(),
        Some(RawAuthor::Relation { .. }) => DEFAULT_AUTHOR.to_string(),
        Some(RawAuthor::Other(_)) | None => TEAM_AUTHOR.to_string(),
    }
}

/// Reformat a timestamp as `YYYY-MM-DD` (UTC).
///
/// Returns an empty string when the value is absent or cannot be parsed.
pub fn normalize_date(raw: Option<&str>) -> String {
    let Some(value) = raw.filter(|v| !v.trim().is_empty()) else {
        return String::new();
    };

    match parse_timestamp(value) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => {
            tracing::warn!(value, "Unparseable timestamp, leaving date empty");
            String::new()
        }
    }
}

/// Parse the timestamp layouts the service is known to return.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Project status, treating unknown values as drafts.
pub fn normalize_status(raw: Option<&str>) -> ProjectStatus {
    match raw.map(ProjectStatus::from_name) {
        Some(Ok(status)) => status,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Unknown project status, treating as Draft");
            ProjectStatus::Draft
        }
        None => ProjectStatus::Draft,
    }
}

/// Article type, treating unknown values as news.
pub fn normalize_article_type(raw: Option<&str>) -> ArticleType {
    match raw.map(ArticleType::from_name) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Unknown article type, treating as News");
            ArticleType::News
        }
        None => ArticleType::News,
    }
}

// ---------------------------------------------------------------------------
// Record mapping
// ---------------------------------------------------------------------------

/// Map a raw project row. `asset_url` turns a stored asset reference into a
/// fetchable URL.
pub fn project_from_raw<F>(raw: RawProject, asset_url: F) -> Project
where
    F: Fn(Option<&str>) -> String,
{
    Project {
        id: raw.id.map(|id| id.into_item_id()).unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        status: normalize_status(raw.status.as_deref()),
        cover_image: asset_url(raw.cover_image.as_deref()),
        category: normalize_category(raw.category.as_ref()),
        tags: normalize_tags(raw.tags.as_ref()),
        content: raw.content.unwrap_or_default(),
        publish_date: normalize_date(raw.publish_date.as_deref()),
        is_featured: raw.is_featured.unwrap_or(false),
        client: raw.client,
        role: raw.role,
    }
}

/// Map a raw article row. The publish date comes from the row's creation
/// timestamp.
pub fn article_from_raw<F>(raw: RawArticle, asset_url: F) -> Article
where
    F: Fn(Option<&str>) -> String,
{
    Article {
        id: raw.id.map(|id| id.into_item_id()).unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        cover_image: asset_url(raw.cover_image.as_deref()),
        content: raw.content.unwrap_or_default(),
        article_type: normalize_article_type(raw.article_type.as_deref()),
        author: normalize_author(raw.author.as_ref()),
        publish_date: normalize_date(raw.date_created.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

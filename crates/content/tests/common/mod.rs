#![allow(dead_code)]

use msru_directus::MemoryDirectus;
use serde_json::{json, Value};

/// A backend with the three site collections present but empty.
pub fn empty_site() -> MemoryDirectus {
    let api = MemoryDirectus::new();
    api.add_collection("projects", &["id", "slug", "status", "is_featured"]);
    api.add_collection("articles", &["id", "slug", "date_created"]);
    api.add_collection("inquiries", &["id", "name"]);
    api
}

/// A minimal published project row.
pub fn project_row(slug: &str, publish_date: &str, is_featured: bool) -> Value {
    json!({
        "slug": slug,
        "title": slug,
        "status": "Published",
        "publish_date": publish_date,
        "is_featured": is_featured,
    })
}

pub fn slugs<T, F>(items: &[T], slug: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items.iter().map(|i| slug(i).to_string()).collect()
}

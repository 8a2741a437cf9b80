//! Integration tests for the schema bootstrap and baseline seeding.

mod common;

use assert_matches::assert_matches;
use msru_content::{bootstrap, try_bootstrap, ContentError};
use msru_directus::memory::Operation;
use msru_directus::{DirectusError, MemoryDirectus};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: bootstrap against an empty service creates and seeds everything
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bootstrap_creates_collections_fields_and_seeds() {
    let api = MemoryDirectus::new();

    assert!(bootstrap(&api).await);

    assert_eq!(
        api.collection_names(),
        vec!["projects", "articles", "inquiries"]
    );
    assert!(api.has_field("projects", "sort"));
    assert!(api.has_field("articles", "date_created"));
    assert!(api.has_field("inquiries", "contact_info"));

    assert_eq!(api.items("projects").len(), 4);
    assert_eq!(api.items("articles").len(), 2);
    assert!(api.items("inquiries").is_empty());
}

// ---------------------------------------------------------------------------
// Test: running twice never duplicates collections or seed records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bootstrap_twice_is_idempotent() {
    let api = MemoryDirectus::new();

    assert!(bootstrap(&api).await);
    assert!(bootstrap(&api).await);

    let calls = api.calls();
    assert_eq!(
        calls.create_collection,
        vec!["projects", "articles", "inquiries"],
        "each missing collection is created exactly once"
    );
    assert_eq!(calls.inserts_into("projects"), 4);
    assert_eq!(calls.inserts_into("articles"), 2);
    assert_eq!(api.items("projects").len(), 4);
    assert_eq!(api.items("articles").len(), 2);
}

#[tokio::test]
async fn second_run_only_repeats_field_attempts() {
    let api = MemoryDirectus::new();

    let first = try_bootstrap(&api).await.unwrap();
    let second = try_bootstrap(&api).await.unwrap();

    assert_eq!(first.collections_created.len(), 3);
    assert_eq!(first.fields_skipped, 0);
    assert_eq!(first.projects_seeded, 4);

    assert!(second.collections_created.is_empty());
    assert_eq!(second.fields_created, 0);
    assert_eq!(second.fields_skipped, first.fields_created);
    assert_eq!(second.projects_seeded, 0);
    assert_eq!(second.articles_seeded, 0);
}

// ---------------------------------------------------------------------------
// Test: partial prior state is repaired
// ---------------------------------------------------------------------------

#[tokio::test]
async fn existing_collection_gets_missing_fields_and_keeps_items() {
    let api = MemoryDirectus::new();
    api.add_collection("projects", &["id", "slug", "title"]);
    api.insert("projects", json!({ "slug": "existing", "title": "Existing" }));

    let report = try_bootstrap(&api).await.unwrap();

    assert_eq!(report.collections_created, vec!["articles", "inquiries"]);
    assert!(api.has_field("projects", "sort"));
    assert_eq!(report.projects_seeded, 0, "non-empty collection is not seeded");
    assert_eq!(api.items("projects").len(), 1);
    assert_eq!(report.articles_seeded, 2);
}

#[tokio::test]
async fn seed_payloads_omit_ids_and_keep_tag_arrays() {
    let api = MemoryDirectus::new();
    assert!(bootstrap(&api).await);

    let kintsugi = api
        .items("projects")
        .into_iter()
        .find(|p| p["slug"] == "kintsugi-digital")
        .unwrap();
    assert_eq!(kintsugi["tags"], json!(["WebGL", "Branding", "Oriental"]));
    // Ids are assigned by the service, in insert order.
    assert_eq!(kintsugi["id"], 1);
}

// ---------------------------------------------------------------------------
// Test: failure handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_failure_reports_false_without_changes() {
    let api = MemoryDirectus::new();
    api.fail(Operation::ListCollections);

    assert!(!bootstrap(&api).await);
    assert!(api.calls().create_collection.is_empty());

    assert_matches!(
        try_bootstrap(&api).await,
        Err(ContentError::Remote(DirectusError::Api { status: 503, .. }))
    );
}

#[tokio::test]
async fn collection_creation_failure_reports_false() {
    let api = MemoryDirectus::new();
    api.fail(Operation::CreateCollection);

    assert!(!bootstrap(&api).await);
    assert!(api.collection_names().is_empty());
}

#[tokio::test]
async fn field_rejections_do_not_abort_the_loop() {
    let api = MemoryDirectus::new();
    api.fail(Operation::CreateField);

    let report = try_bootstrap(&api).await.unwrap();

    assert_eq!(report.fields_created, 0);
    assert_eq!(report.fields_skipped, api.calls().create_field);
    assert!(report.fields_skipped > 0);
    assert_eq!(report.projects_seeded, 4);
}

#[tokio::test]
async fn seeding_failure_still_succeeds_and_retries_next_run() {
    let api = MemoryDirectus::new();
    api.fail(Operation::CreateItem);

    assert!(bootstrap(&api).await, "seeding failures are not fatal");
    assert!(api.items("projects").is_empty());

    api.recover(Operation::CreateItem);
    let report = try_bootstrap(&api).await.unwrap();
    assert_eq!(report.projects_seeded, 4);
    assert_eq!(report.articles_seeded, 2);
}

#[tokio::test]
async fn unreadable_collection_skips_its_seeding() {
    let api = MemoryDirectus::new();
    api.fail(Operation::ReadItems);

    let report = try_bootstrap(&api).await.unwrap();

    assert_eq!(report.projects_seeded, 0);
    assert_eq!(report.articles_seeded, 0);
    assert!(api.calls().create_item.is_empty());
}

//! Integration tests for the Directus HTTP client against a local server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use msru_directus::{
    CollectionDefinition, ContentApi, DirectusClient, DirectusConfig, DirectusError,
    FieldDefinition, FieldType, Filter, ItemQuery,
};
use serde_json::{json, Value};

/// One request as the server saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    authorization: Option<String>,
    body: String,
}

type Log = Arc<Mutex<Vec<Seen>>>;

/// Canned Directus responses keyed by method and path.
async fn directus(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    log.lock().unwrap().push(Seen {
        method: method.clone(),
        path: path.clone(),
        params,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    match (method, path.as_str()) {
        (Method::GET, "/collections") => Json(json!({
            "data": [
                { "collection": "projects", "meta": null },
                { "collection": "articles", "meta": null }
            ]
        }))
        .into_response(),
        (Method::GET, "/items/projects") => Json(json!({
            "data": [{ "id": 4, "slug": "zen-garden" }]
        }))
        .into_response(),
        (Method::GET, "/items/broken") => "not json".into_response(),
        (Method::POST, "/items/articles") => {
            let mut item: Value = serde_json::from_str(&body).unwrap();
            item["id"] = json!(7);
            Json(json!({ "data": item })).into_response()
        }
        (Method::POST, "/items/inquiries") => StatusCode::NO_CONTENT.into_response(),
        (Method::POST, "/fields/projects") => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "errors": [
                    { "message": "Field \"slug\" already exists", "extensions": { "code": "INVALID_PAYLOAD" } },
                    { "message": "second error" }
                ]
            })),
        )
            .into_response(),
        (Method::POST, "/collections") => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start the canned server on an ephemeral port and return a client for it.
async fn start(token: &str) -> (DirectusClient, Log) {
    let log = Log::default();
    let app = Router::new().fallback(directus).with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = DirectusClient::new(DirectusConfig::new(format!("http://{addr}/"), token)).unwrap();
    (client, log)
}

fn last(log: &Log) -> Seen {
    log.lock().unwrap().last().cloned().unwrap()
}

// ---------------------------------------------------------------------------
// Test: authentication header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let (client, log) = start("static-token").await;

    let collections = client.list_collections().await.unwrap();

    assert_eq!(collections, vec!["projects", "articles"]);
    let seen = last(&log);
    assert_eq!(seen.method, Method::GET);
    assert_eq!(seen.path, "/collections");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer static-token"));
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let (client, log) = start("").await;

    client.list_collections().await.unwrap();

    assert_eq!(last(&log).authorization, None);
}

// ---------------------------------------------------------------------------
// Test: item reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_items_encodes_query_and_unwraps_data() {
    let (client, log) = start("t").await;
    let filter = Filter::and([
        Filter::eq("slug", "zen-garden"),
        Filter::eq("status", "Published"),
    ]);
    let query = ItemQuery::new()
        .filter(filter.clone())
        .sort("-publish_date")
        .limit(1)
        .all_fields();

    let items = client.read_items("projects", &query).await.unwrap();

    assert_eq!(items, vec![json!({ "id": 4, "slug": "zen-garden" })]);

    let seen = last(&log);
    assert_eq!(seen.path, "/items/projects");
    let sent_filter: Value = serde_json::from_str(&seen.params["filter"]).unwrap();
    assert_eq!(sent_filter, filter.to_json());
    assert_eq!(seen.params["sort"], "-publish_date");
    assert_eq!(seen.params["limit"], "1");
    assert_eq!(seen.params["fields"], "*");
}

#[tokio::test]
async fn empty_query_sends_no_params() {
    let (client, log) = start("t").await;

    client.read_items("projects", &ItemQuery::new()).await.unwrap();

    assert!(last(&log).params.is_empty());
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let (client, _log) = start("t").await;

    assert_matches!(
        client.read_items("broken", &ItemQuery::new()).await,
        Err(DirectusError::Decode(_))
    );
}

// ---------------------------------------------------------------------------
// Test: item creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_item_posts_json_and_returns_stored_record() {
    let (client, log) = start("t").await;
    let item = json!({ "slug": "philosophy-of-void", "type": "Design" });

    let stored = client.create_item("articles", &item).await.unwrap();

    assert_eq!(stored["id"], 7);
    assert_eq!(stored["slug"], "philosophy-of-void");

    let seen = last(&log);
    assert_eq!(seen.method, Method::POST);
    assert_eq!(serde_json::from_str::<Value>(&seen.body).unwrap(), item);
}

#[tokio::test]
async fn create_item_without_content_returns_null() {
    let (client, _log) = start("t").await;

    let stored = client
        .create_item("inquiries", &json!({ "name": "Mei" }))
        .await
        .unwrap();

    assert_eq!(stored, Value::Null);
}

// ---------------------------------------------------------------------------
// Test: error responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_body_yields_first_directus_message() {
    let (client, log) = start("t").await;
    let field = FieldDefinition::new("slug", FieldType::String, "input").required();

    let err = client.create_field("projects", &field).await.unwrap_err();

    assert_matches!(
        &err,
        DirectusError::Api { status: 400, message } if message == "Field \"slug\" already exists"
    );
    assert_eq!(err.status(), Some(400));

    let sent: Value = serde_json::from_str(&last(&log).body).unwrap();
    assert_eq!(sent["field"], "slug");
    assert_eq!(sent["type"], "string");
}

#[tokio::test]
async fn plain_error_body_is_kept_as_message() {
    let (client, _log) = start("t").await;

    assert_matches!(
        client
            .create_collection(&CollectionDefinition::new("inquiries"))
            .await,
        Err(DirectusError::Api { status: 403, message }) if message == "Forbidden"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let client =
        DirectusClient::new(DirectusConfig::new("http://127.0.0.1:1", "t")).unwrap();

    let err = client.list_collections().await.unwrap_err();

    assert_matches!(err, DirectusError::Request(_));
    assert!(err.to_string().starts_with("HTTP request failed"));
}

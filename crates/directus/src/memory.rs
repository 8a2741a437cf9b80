//! In-process [`ContentApi`] backend.
//!
//! Keeps collections, fields and items in memory and answers queries with
//! the same filter/sort/limit semantics as Directus. Used by integration
//! tests and for running the site without a reachable CMS. Individual
//! operations can be made to fail to exercise error paths.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::api::ContentApi;
use crate::assets::resolve_asset_url;
use crate::error::DirectusError;
use crate::query::ItemQuery;
use crate::schema::{CollectionDefinition, FieldDefinition};

/// Base URL used for asset resolution.
pub const MEMORY_BASE_URL: &str = "http://directus.memory";

/// A content-service operation, for failure injection and call counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCollections,
    CreateCollection,
    CreateField,
    ReadItems,
    CreateItem,
}

/// Record of the calls made against the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallLog {
    pub list_collections: usize,
    /// Collection names, in call order.
    pub create_collection: Vec<String>,
    pub create_field: usize,
    pub read_items: usize,
    /// Target collection of each insert, in call order.
    pub create_item: Vec<String>,
}

impl CallLog {
    pub fn inserts_into(&self, collection: &str) -> usize {
        self.create_item.iter().filter(|c| *c == collection).count()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    /// Collection name -> field names, in creation order.
    collections: Vec<(String, Vec<String>)>,
    items: HashMap<String, Vec<Value>>,
    next_id: i64,
    failing: HashSet<Operation>,
    calls: CallLog,
}

impl MemoryState {
    fn fields(&self, collection: &str) -> Option<&Vec<String>> {
        self.collections
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, fields)| fields)
    }

    fn fields_mut(&mut self, collection: &str) -> Option<&mut Vec<String>> {
        self.collections
            .iter_mut()
            .find(|(name, _)| name == collection)
            .map(|(_, fields)| fields)
    }

    fn check(&self, op: Operation) -> Result<(), DirectusError> {
        if self.failing.contains(&op) {
            return Err(DirectusError::Api {
                status: 503,
                message: format!("{op:?} is unavailable"),
            });
        }
        Ok(())
    }
}

/// In-memory content service.
#[derive(Debug, Default)]
pub struct MemoryDirectus {
    state: Mutex<MemoryState>,
}

impl MemoryDirectus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a collection directly, bypassing call accounting.
    pub fn add_collection(&self, name: &str, fields: &[&str]) {
        let mut state = self.lock();
        if state.fields(name).is_none() {
            state.collections.push((
                name.to_string(),
                fields.iter().map(|f| f.to_string()).collect(),
            ));
        }
    }

    /// Store an item directly, bypassing call accounting. The collection
    /// is created if needed and an integer `id` is assigned if missing.
    pub fn insert(&self, collection: &str, item: Value) -> Value {
        self.add_collection(collection, &[]);
        let mut state = self.lock();
        Self::store(&mut state, collection, item)
    }

    /// Make every subsequent call of `op` fail with a 503.
    pub fn fail(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    /// Undo [`fail`](Self::fail).
    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    pub fn calls(&self) -> CallLog {
        self.lock().calls.clone()
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.lock()
            .collections
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn has_field(&self, collection: &str, field: &str) -> bool {
        self.lock()
            .fields(collection)
            .is_some_and(|fields| fields.iter().any(|f| f == field))
    }

    pub fn items(&self, collection: &str) -> Vec<Value> {
        self.lock()
            .items
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn store(state: &mut MemoryState, collection: &str, mut item: Value) -> Value {
        let auto_created = state
            .fields(collection)
            .is_some_and(|fields| fields.iter().any(|f| f == "date_created"));

        if let Value::Object(map) = &mut item {
            if !map.contains_key("id") {
                state.next_id += 1;
                map.insert("id".to_string(), Value::from(state.next_id));
            }
            if auto_created && !map.contains_key("date_created") {
                map.insert(
                    "date_created".to_string(),
                    Value::from(Utc::now().to_rfc3339()),
                );
            }
        }

        state
            .items
            .entry(collection.to_string())
            .or_default()
            .push(item.clone());
        item
    }
}

fn forbidden(collection: &str) -> DirectusError {
    DirectusError::Api {
        status: 403,
        message: format!("You don't have permission to access collection \"{collection}\""),
    }
}

#[async_trait]
impl ContentApi for MemoryDirectus {
    async fn list_collections(&self) -> Result<Vec<String>, DirectusError> {
        let mut state = self.lock();
        state.calls.list_collections += 1;
        state.check(Operation::ListCollections)?;
        Ok(state
            .collections
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn create_collection(
        &self,
        definition: &CollectionDefinition,
    ) -> Result<(), DirectusError> {
        let mut state = self.lock();
        state
            .calls
            .create_collection
            .push(definition.collection.clone());
        state.check(Operation::CreateCollection)?;

        if state.fields(&definition.collection).is_some() {
            return Err(DirectusError::Api {
                status: 400,
                message: format!("Collection \"{}\" already exists", definition.collection),
            });
        }
        state
            .collections
            .push((definition.collection.clone(), vec!["id".to_string()]));
        Ok(())
    }

    async fn create_field(
        &self,
        collection: &str,
        field: &FieldDefinition,
    ) -> Result<(), DirectusError> {
        let mut state = self.lock();
        state.calls.create_field += 1;
        state.check(Operation::CreateField)?;

        let fields = state
            .fields_mut(collection)
            .ok_or_else(|| forbidden(collection))?;
        if fields.iter().any(|f| *f == field.field) {
            return Err(DirectusError::Api {
                status: 400,
                message: format!("Field \"{}\" already exists", field.field),
            });
        }
        fields.push(field.field.clone());
        Ok(())
    }

    async fn read_items(
        &self,
        collection: &str,
        query: &ItemQuery,
    ) -> Result<Vec<Value>, DirectusError> {
        let mut state = self.lock();
        state.calls.read_items += 1;
        state.check(Operation::ReadItems)?;

        if state.fields(collection).is_none() {
            return Err(forbidden(collection));
        }
        let items = state
            .items
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(query.apply(items))
    }

    async fn create_item(&self, collection: &str, item: &Value) -> Result<Value, DirectusError> {
        let mut state = self.lock();
        state.calls.create_item.push(collection.to_string());
        state.check(Operation::CreateItem)?;

        if state.fields(collection).is_none() {
            return Err(forbidden(collection));
        }
        Ok(Self::store(&mut state, collection, item.clone()))
    }

    fn asset_url(&self, id: Option<&str>) -> String {
        resolve_asset_url(MEMORY_BASE_URL, id)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::query::Filter;
    use crate::schema::FieldType;

    #[tokio::test]
    async fn create_collection_then_duplicate_is_rejected() {
        let api = MemoryDirectus::new();
        let def = CollectionDefinition::new("projects");

        api.create_collection(&def).await.unwrap();
        assert_matches!(
            api.create_collection(&def).await,
            Err(DirectusError::Api { status: 400, .. })
        );
        assert_eq!(api.collection_names(), vec!["projects"]);
        assert_eq!(api.calls().create_collection.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_field_is_rejected() {
        let api = MemoryDirectus::new();
        api.add_collection("articles", &["id"]);
        let field = FieldDefinition::new("slug", FieldType::String, "input");

        api.create_field("articles", &field).await.unwrap();
        assert_matches!(
            api.create_field("articles", &field).await,
            Err(DirectusError::Api { status: 400, .. })
        );
        assert!(api.has_field("articles", "slug"));
    }

    #[tokio::test]
    async fn unknown_collection_is_forbidden() {
        let api = MemoryDirectus::new();
        assert_matches!(
            api.read_items("inquiries", &ItemQuery::new()).await,
            Err(DirectusError::Api { status: 403, .. })
        );
    }

    #[tokio::test]
    async fn create_item_assigns_id_and_query_applies() {
        let api = MemoryDirectus::new();
        api.add_collection("projects", &["id", "slug"]);

        let stored = api
            .create_item("projects", &json!({ "slug": "neon-dynasty" }))
            .await
            .unwrap();
        assert_eq!(stored["id"], 1);

        let found = api
            .read_items(
                "projects",
                &ItemQuery::new().filter(Filter::eq("slug", "neon-dynasty")),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(api.calls().inserts_into("projects"), 1);
    }

    #[tokio::test]
    async fn date_created_is_stamped_when_declared() {
        let api = MemoryDirectus::new();
        api.add_collection("articles", &["id", "date_created"]);
        let stored = api.create_item("articles", &json!({})).await.unwrap();
        assert!(stored["date_created"].is_string());
    }

    #[tokio::test]
    async fn injected_failures_can_be_cleared() {
        let api = MemoryDirectus::new();
        api.fail(Operation::ListCollections);
        assert_matches!(
            api.list_collections().await,
            Err(DirectusError::Api { status: 503, .. })
        );

        api.recover(Operation::ListCollections);
        assert!(api.list_collections().await.unwrap().is_empty());
        assert_eq!(api.calls().list_collections, 2);
    }
}

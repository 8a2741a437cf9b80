//! The content-service seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DirectusError;
use crate::query::ItemQuery;
use crate::schema::{CollectionDefinition, FieldDefinition};

/// Operations the data layer and schema bootstrap need from the content
/// service.
///
/// Implemented over HTTP by [`crate::DirectusClient`] and in process by
/// [`crate::MemoryDirectus`]. Held as `Arc<dyn ContentApi>` and passed to
/// callers explicitly.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Names of all collections visible to the configured token.
    async fn list_collections(&self) -> Result<Vec<String>, DirectusError>;

    async fn create_collection(
        &self,
        definition: &CollectionDefinition,
    ) -> Result<(), DirectusError>;

    /// Add one field. Fails if the field already exists.
    async fn create_field(
        &self,
        collection: &str,
        field: &FieldDefinition,
    ) -> Result<(), DirectusError>;

    /// Raw items of `collection` matching `query`.
    async fn read_items(
        &self,
        collection: &str,
        query: &ItemQuery,
    ) -> Result<Vec<Value>, DirectusError>;

    /// Insert one item, returning the stored record (or `Null` when the
    /// token cannot read it back).
    async fn create_item(&self, collection: &str, item: &Value) -> Result<Value, DirectusError>;

    /// Fetchable URL for a stored asset reference. Pure; no I/O.
    fn asset_url(&self, id: Option<&str>) -> String;
}

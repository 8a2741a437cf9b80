//! Wire types for Directus schema mutation.
//!
//! A [`CollectionDefinition`] serializes to the `POST /collections` payload;
//! each [`FieldDefinition`] serializes to a `POST /fields/{collection}`
//! payload.

use serde::Serialize;
use serde_json::{json, Value};

/// Directus field storage types used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Text,
    Json,
    DateTime,
    Timestamp,
    Boolean,
    Integer,
}

/// Editor metadata for a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldMeta {
    /// Admin-app interface hint, e.g. `input`, `select-dropdown`, `tags`.
    pub interface: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<Vec<String>>,
}

/// One field of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub meta: FieldMeta,
}

impl FieldDefinition {
    pub fn new(field: impl Into<String>, field_type: FieldType, interface: &str) -> Self {
        Self {
            field: field.into(),
            field_type,
            meta: FieldMeta {
                interface: interface.to_string(),
                ..FieldMeta::default()
            },
        }
    }

    pub fn required(mut self) -> Self {
        self.meta.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.meta.hidden = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.meta.readonly = true;
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.meta.note = Some(note.to_string());
        self
    }

    /// Dropdown choices; each value doubles as its display text.
    pub fn choices(mut self, values: &[&str]) -> Self {
        let choices: Vec<Value> = values
            .iter()
            .map(|v| json!({ "text": v, "value": v }))
            .collect();
        self.meta.options = Some(json!({ "choices": choices }));
        self
    }

    /// Directus special flags, e.g. `date-created`.
    pub fn special(mut self, flags: &[&str]) -> Self {
        self.meta.special = Some(flags.iter().map(|f| f.to_string()).collect());
        self
    }
}

/// Collection-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionMeta {
    pub singleton: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
}

/// Database-level settings. Present so Directus creates a real table
/// rather than a folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSchema {
    pub name: String,
}

/// A collection and the fields the site expects on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDefinition {
    pub collection: String,
    pub meta: CollectionMeta,
    pub schema: CollectionSchema,
    /// Created one by one after the collection exists.
    #[serde(skip)]
    pub fields: Vec<FieldDefinition>,
}

impl CollectionDefinition {
    pub fn new(collection: impl Into<String>) -> Self {
        let collection: String = collection.into();
        Self {
            schema: CollectionSchema {
                name: collection.clone(),
            },
            collection,
            meta: CollectionMeta::default(),
            fields: Vec::new(),
        }
    }

    pub fn sort_field(mut self, field: &str) -> Self {
        self.meta.sort_field = Some(field.to_string());
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_payload_matches_directus_shape() {
        let field = FieldDefinition::new("status", FieldType::String, "select-dropdown")
            .choices(&["Published", "Draft"]);

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "field": "status",
                "type": "string",
                "meta": {
                    "interface": "select-dropdown",
                    "options": { "choices": [
                        { "text": "Published", "value": "Published" },
                        { "text": "Draft", "value": "Draft" }
                    ]}
                }
            })
        );
    }

    #[test]
    fn flags_serialize_only_when_set() {
        let field = FieldDefinition::new("slug", FieldType::String, "input").required();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["meta"]["required"], true);
        assert!(json["meta"].get("hidden").is_none());

        let date = FieldDefinition::new("publish_date", FieldType::DateTime, "datetime");
        assert_eq!(serde_json::to_value(&date).unwrap()["type"], "dateTime");
    }

    #[test]
    fn collection_payload_skips_fields() {
        let def = CollectionDefinition::new("projects")
            .sort_field("sort")
            .field(FieldDefinition::new("sort", FieldType::Integer, "input").hidden());

        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({
                "collection": "projects",
                "meta": { "singleton": false, "sort_field": "sort" },
                "schema": { "name": "projects" }
            })
        );
        assert_eq!(def.fields.len(), 1);
    }
}

//! Records as the content service returns them.
//!
//! The service is schemaless from our point of view: relational fields come
//! back as an expanded object, a bare identifier or a plain scalar depending
//! on how the collection was configured and which fields were requested.
//! Each such field is modelled as an enum built from the raw JSON value so
//! [`crate::normalize`] can match on every shape.

use serde::Deserialize;
use serde_json::Value;

use crate::types::ItemId;

/// Primary key as returned by the service: integer or string (UUID).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    pub fn into_item_id(self) -> ItemId {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// A project's `category` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawCategory {
    /// Expanded relation, e.g. `{ "id": 3, "name": "Interaction" }`.
    Relation { name: Option<String> },
    /// Plain label stored directly on the record.
    Label(String),
    /// Bare foreign key or any other scalar.
    Other(Value),
}

impl From<Value> for RawCategory {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Relation {
                name: map.get("name").and_then(Value::as_str).map(str::to_string),
            },
            Value::String(s) => Self::Label(s),
            other => Self::Other(other),
        }
    }
}

/// A project's `tags` field: a JSON array, or a delimited string from
/// collections that store tags as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawTags {
    List(Vec<Value>),
    Text(String),
    Other(Value),
}

impl From<Value> for RawTags {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

/// An article's `author` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawAuthor {
    /// Expanded user relation, e.g. `{ "first_name": "Alex" }`.
    Relation { first_name: Option<String> },
    /// Bare user id, free-text name, or anything else.
    Other(Value),
}

impl From<Value> for RawAuthor {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Relation {
                first_name: map
                    .get("first_name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            other => Self::Other(other),
        }
    }
}

/// A row of the `projects` collection. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProject {
    pub id: Option<RawId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<RawCategory>,
    pub tags: Option<RawTags>,
    pub content: Option<String>,
    pub publish_date: Option<String>,
    pub is_featured: Option<bool>,
    pub client: Option<String>,
    pub role: Option<String>,
}

/// A row of the `articles` collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawArticle {
    pub id: Option<RawId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub cover_image: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub article_type: Option<String>,
    pub author: Option<RawAuthor>,
    pub date_created: Option<String>,
}

//! Item query model: filter, sort, limit and field selection.
//!
//! Encodes to the Directus query-string format:
//! `?filter={"status":{"_eq":"Published"}}&sort=-publish_date&limit=1&fields=*`.

use std::cmp::Ordering;

use serde_json::{json, Value};

/// A Directus filter rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `{ field: { "_eq": value } }`
    Eq(String, Value),
    /// `{ "_and": [ ... ] }`
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::And(filters.into_iter().collect())
    }

    /// JSON form sent in the `filter` query parameter.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Eq(field, value) => json!({ field: { "_eq": value } }),
            Self::And(filters) => {
                json!({ "_and": filters.iter().map(Filter::to_json).collect::<Vec<_>>() })
            }
        }
    }

    /// Evaluate the rule against an item locally.
    pub fn matches(&self, item: &Value) -> bool {
        match self {
            Self::Eq(field, value) => item.get(field) == Some(value),
            Self::And(filters) => filters.iter().all(|f| f.matches(item)),
        }
    }
}

/// Parameters for a `GET /items/{collection}` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub filter: Option<Filter>,
    /// Sort keys; a leading `-` sorts descending.
    pub sort: Vec<String>,
    pub limit: Option<u32>,
    pub fields: Vec<String>,
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, key: impl Into<String>) -> Self {
        self.sort.push(key.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request all top-level fields without expanding relations.
    pub fn all_fields(mut self) -> Self {
        self.fields = vec!["*".to_string()];
        self
    }

    /// Query-string pairs for this query. Empty parts are omitted.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.to_json().to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        params
    }

    /// Apply filter, sort and limit to a set of items locally.
    pub fn apply(&self, items: &[Value]) -> Vec<Value> {
        let mut selected: Vec<Value> = items
            .iter()
            .filter(|item| self.filter.as_ref().map_or(true, |f| f.matches(item)))
            .cloned()
            .collect();

        if !self.sort.is_empty() {
            selected.sort_by(|a, b| {
                self.sort
                    .iter()
                    .map(|key| {
                        let (field, descending) = match key.strip_prefix('-') {
                            Some(field) => (field, true),
                            None => (key.as_str(), false),
                        };
                        let ordering = compare_values(a.get(field), b.get(field));
                        if descending {
                            ordering.reverse()
                        } else {
                            ordering
                        }
                    })
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit as usize);
        }
        selected
    }
}

/// Order JSON scalars; missing and null values sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_encodes_directus_operators() {
        let filter = Filter::and([
            Filter::eq("status", "Published"),
            Filter::eq("is_featured", true),
        ]);
        assert_eq!(
            filter.to_json(),
            json!({ "_and": [
                { "status": { "_eq": "Published" } },
                { "is_featured": { "_eq": true } }
            ]})
        );
    }

    #[test]
    fn params_include_only_set_parts() {
        let query = ItemQuery::new()
            .filter(Filter::eq("slug", "zen-garden"))
            .sort("-publish_date")
            .limit(1)
            .all_fields();

        let params = query.to_params();
        assert_eq!(params.len(), 4);
        assert_eq!(params[0], ("filter", r#"{"slug":{"_eq":"zen-garden"}}"#.to_string()));
        assert_eq!(params[1], ("sort", "-publish_date".to_string()));
        assert_eq!(params[2], ("limit", "1".to_string()));
        assert_eq!(params[3], ("fields", "*".to_string()));

        assert!(ItemQuery::new().to_params().is_empty());
    }

    #[test]
    fn apply_filters_sorts_and_limits() {
        let items = vec![
            json!({ "slug": "a", "status": "Published", "publish_date": "2023-09-01" }),
            json!({ "slug": "b", "status": "Draft", "publish_date": "2024-02-01" }),
            json!({ "slug": "c", "status": "Published", "publish_date": "2024-01-10" }),
            json!({ "slug": "d", "status": "Published" }),
        ];

        let query = ItemQuery::new()
            .filter(Filter::eq("status", "Published"))
            .sort("-publish_date");
        let slugs: Vec<_> = query
            .apply(&items)
            .iter()
            .map(|i| i["slug"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(slugs, vec!["c", "a", "d"]);

        let first = query.limit(1).apply(&items);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0]["slug"], "c");
    }

    #[test]
    fn eq_does_not_coerce_types() {
        let item = json!({ "is_featured": "true" });
        assert!(!Filter::eq("is_featured", true).matches(&item));
    }
}

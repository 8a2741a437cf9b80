//! HTTP client for the Directus REST endpoints.
//!
//! Wraps the collections, fields and items endpoints using [`reqwest`].
//! Every response is unwrapped from Directus' `{ "data": ... }` envelope.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::ContentApi;
use crate::config::DirectusConfig;
use crate::error::DirectusError;
use crate::query::ItemQuery;
use crate::schema::{CollectionDefinition, FieldDefinition};

/// HTTP client for a single Directus instance.
pub struct DirectusClient {
    client: reqwest::Client,
    config: DirectusConfig,
}

/// Directus response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// One entry of `GET /collections`.
#[derive(Debug, Deserialize)]
struct CollectionInfo {
    collection: String,
}

/// Directus error body: `{ "errors": [ { "message": "..." } ] }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

impl DirectusClient {
    /// Create a client with its own connection pool and the configured
    /// request timeout.
    pub fn new(config: DirectusConfig) -> Result<Self, DirectusError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Execute one request against `<base_url><path>`.
    ///
    /// Attaches the bearer token when one is configured, sends `body` as
    /// JSON, and returns the raw response once its status is known to be
    /// successful.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response, DirectusError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, %url, "Directus request");

        let mut builder = self.client.request(method, url).query(query);
        if !self.config.token.is_empty() {
            builder = builder.bearer_auth(&self.config.token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::ensure_success(response).await
    }

    /// Execute a request and decode the `data` member of the response.
    pub async fn request_data<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, DirectusError> {
        let response = self.request(method, path, query, body).await?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure, returns
    /// a [`DirectusError::Api`] carrying the first Directus error message
    /// or the raw body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DirectusError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(DirectusError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// First `errors[].message` of a Directus error body, or the body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.errors.into_iter().next())
        .map(|entry| entry.message)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl ContentApi for DirectusClient {
    async fn list_collections(&self) -> Result<Vec<String>, DirectusError> {
        let collections: Vec<CollectionInfo> = self
            .request_data(Method::GET, "/collections", &[], None)
            .await?;
        Ok(collections.into_iter().map(|c| c.collection).collect())
    }

    async fn create_collection(
        &self,
        definition: &CollectionDefinition,
    ) -> Result<(), DirectusError> {
        let body = serde_json::to_value(definition)?;
        self.request(Method::POST, "/collections", &[], Some(&body))
            .await?;
        Ok(())
    }

    async fn create_field(
        &self,
        collection: &str,
        field: &FieldDefinition,
    ) -> Result<(), DirectusError> {
        let body = serde_json::to_value(field)?;
        self.request(
            Method::POST,
            &format!("/fields/{collection}"),
            &[],
            Some(&body),
        )
        .await?;
        Ok(())
    }

    async fn read_items(
        &self,
        collection: &str,
        query: &ItemQuery,
    ) -> Result<Vec<Value>, DirectusError> {
        self.request_data(
            Method::GET,
            &format!("/items/{collection}"),
            &query.to_params(),
            None,
        )
        .await
    }

    async fn create_item(&self, collection: &str, item: &Value) -> Result<Value, DirectusError> {
        let response = self
            .request(
                Method::POST,
                &format!("/items/{collection}"),
                &[],
                Some(item),
            )
            .await?;

        // 204 when the token may create but not read the collection.
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        let envelope: Envelope<Value> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    fn asset_url(&self, id: Option<&str>) -> String {
        self.config.asset_url(id)
    }
}

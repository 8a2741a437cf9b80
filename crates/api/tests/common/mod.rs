#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use msru_core::lifecycle::{Lifecycle, LifecycleHandle};
use msru_directus::{ContentApi, MemoryDirectus};
use serde_json::Value;
use tower::ServiceExt;

use msru_api::config::ServerConfig;
use msru_api::router::build_app_router;
use msru_api::startup::run_bootstrap;
use msru_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// A running application backed by an in-memory content service.
pub struct TestApp {
    pub content: Arc<MemoryDirectus>,
    pub lifecycle: LifecycleHandle,
}

impl TestApp {
    /// A fresh app whose bootstrap has not run yet.
    pub fn starting() -> Self {
        Self {
            content: Arc::new(MemoryDirectus::new()),
            lifecycle: LifecycleHandle::new(),
        }
    }

    /// An app whose bootstrap has run against an empty backend.
    pub async fn ready() -> Self {
        let app = Self::starting();
        let state = run_bootstrap(app.content.as_ref(), &app.lifecycle).await;
        assert_eq!(state, Lifecycle::Ready);
        app
    }

    /// The full router, sharing this app's backend and lifecycle.
    pub fn router(&self) -> Router {
        let config = test_config();
        let content: Arc<dyn ContentApi> = self.content.clone();
        let state = AppState {
            content,
            lifecycle: self.lifecycle.clone(),
            config: Arc::new(config.clone()),
        };
        build_app_router(state, &config)
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

use std::sync::Arc;

use msru_core::lifecycle::LifecycleHandle;
use msru_directus::ContentApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Content service handle (Directus in production, in-memory in tests).
    pub content: Arc<dyn ContentApi>,
    /// Startup state, written once by the bootstrap task.
    pub lifecycle: LifecycleHandle,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

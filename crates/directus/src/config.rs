use std::time::Duration;

use crate::assets::resolve_asset_url;

/// Default Directus instance for the studio site.
pub const DEFAULT_DIRECTUS_URL: &str = "https://directus.msru.cn";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the Directus instance.
///
/// Constructed once at startup and handed to [`crate::DirectusClient`];
/// nothing reads it from ambient global state.
#[derive(Debug, Clone)]
pub struct DirectusConfig {
    /// Base URL without a trailing slash, e.g. `https://directus.msru.cn`.
    pub base_url: String,
    /// Static access token sent as `Authorization: Bearer <token>`.
    /// Empty means requests go out unauthenticated (public role).
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DirectusConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `DIRECTUS_URL`          | `https://directus.msru.cn`  |
    /// | `DIRECTUS_TOKEN`        | empty                       |
    /// | `DIRECTUS_TIMEOUT_SECS` | `15`                        |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DIRECTUS_URL").unwrap_or_else(|_| DEFAULT_DIRECTUS_URL.into());
        let token = std::env::var("DIRECTUS_TOKEN").unwrap_or_default();

        let timeout_secs = std::env::var("DIRECTUS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if token.is_empty() {
            tracing::warn!("DIRECTUS_TOKEN is not set, requests will use the public role");
        }

        Self {
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(base_url, token)
        }
    }

    /// Resolve an asset reference against this instance.
    pub fn asset_url(&self, id: Option<&str>) -> String {
        resolve_asset_url(&self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let config = DirectusConfig::new("https://cms.example/", "t");
        assert_eq!(config.base_url, "https://cms.example");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn asset_url_uses_base() {
        let config = DirectusConfig::new(DEFAULT_DIRECTUS_URL, "");
        assert_eq!(
            config.asset_url(Some("img-1")),
            "https://directus.msru.cn/assets/img-1"
        );
    }
}

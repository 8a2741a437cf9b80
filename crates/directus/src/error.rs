/// Errors from the Directus client layer.
#[derive(Debug, thiserror::Error)]
pub enum DirectusError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Directus returned a non-2xx status code.
    #[error("Directus API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// First error message from the response, or the raw body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DirectusError {
    /// HTTP status of an API rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

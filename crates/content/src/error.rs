use msru_core::error::CoreError;
use msru_directus::DirectusError;

/// Errors from the content layer.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content service was unreachable or rejected the request.
    #[error(transparent)]
    Remote(#[from] DirectusError),

    /// A local rule rejected the input before any request was made.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A payload could not be encoded as JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

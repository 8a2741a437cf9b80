//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn ContentApi` as the first argument.
//!
//! Methods come in pairs. The `get_*`/`submit_*` methods are what pages
//! call: they log failures and degrade to an empty list, `None` or
//! `false`, so "nothing published" and "fetch failed" look the same to the
//! caller. The `try_*` methods return the underlying [`ContentError`] for
//! callers that need to tell the two apart.
//!
//! [`ContentError`]: crate::ContentError

pub mod article_repo;
pub mod inquiry_repo;
pub mod project_repo;

pub use article_repo::ArticleRepo;
pub use inquiry_repo::InquiryRepo;
pub use project_repo::ProjectRepo;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode raw rows, skipping (and logging) any that do not fit `T`.
pub(crate) fn decode_rows<T: DeserializeOwned>(collection: &str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}

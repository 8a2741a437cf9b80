//! Directus REST client binding.
//!
//! Holds the one configured handle to the content service (base URL,
//! static bearer token, timeout) and exposes the small slice of the
//! Directus API the site needs: schema introspection and mutation, item
//! queries and item creation. The [`ContentApi`] trait is the seam the
//! data layer programs against; [`DirectusClient`] speaks HTTP and
//! [`MemoryDirectus`] keeps everything in process.

pub mod api;
pub mod assets;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod query;
pub mod schema;

pub use api::ContentApi;
pub use assets::{resolve_asset_url, PLACEHOLDER_IMAGE_URL};
pub use client::DirectusClient;
pub use config::DirectusConfig;
pub use error::DirectusError;
pub use memory::MemoryDirectus;
pub use query::{Filter, ItemQuery};
pub use schema::{CollectionDefinition, FieldDefinition, FieldType};

//! Content layer for the studio site.
//!
//! - [`bootstrap`] makes the remote schema match what the site expects and
//!   seeds empty collections with baseline content.
//! - [`repositories`] is the only place that queries or writes business
//!   data, and the sole producer of normalized [`msru_core::models`] values.
//!
//! Everything takes the content service as `&dyn ContentApi`; there is no
//! global client.

pub mod bootstrap;
pub mod error;
pub mod repositories;
pub mod schema;

pub use bootstrap::{bootstrap, try_bootstrap, BootstrapReport};
pub use error::ContentError;
pub use repositories::{ArticleRepo, InquiryRepo, ProjectRepo};

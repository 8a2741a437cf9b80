//! Domain types and pure logic for the studio site's content layer.
//!
//! Nothing in this crate performs I/O. It defines the normalized shapes
//! handed to pages ([`models`]), the loosely-typed shapes the content
//! service actually returns ([`raw`]), the total mapping between the two
//! ([`normalize`]), the baseline content used to seed an empty service
//! ([`seed`]), and the startup [`lifecycle`] state machine.

pub mod error;
pub mod lifecycle;
pub mod models;
pub mod normalize;
pub mod raw;
pub mod seed;
pub mod types;

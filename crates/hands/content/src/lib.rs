//! Data-driven hand content and loaders.
//!
//! This crate provides loaders for the data files that configure hands:
//! - Hand layouts per actor kind (data-driven via TOML)
//! - Item catalogs for the in-memory inventory (data-driven via RON)
//!
//! All loaders use hands-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, ItemLoader, LayoutCatalog, LayoutLoader};

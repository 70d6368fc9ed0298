//! Catalog adapters
//!
//! - [`static_catalog`] - In-memory catalog, loadable from TOML or JSON

pub mod static_catalog;

pub use static_catalog::{StaticCatalog, StaticResource};

//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Declaration files (`[[constraint]]` tables)
//! - `catalog/` - Static catalogs loaded from TOML or JSON

pub mod catalog;
pub mod toml;

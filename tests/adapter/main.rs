//! Adapter tests
//!
//! Tests for I/O adapter implementations:
//! - TOML declaration files
//! - Static catalog files
//! - Configuration loading

mod catalog_test;
mod toml_test;

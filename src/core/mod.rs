//! Core domain logic for constrain
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RawDeclaration`, `Token`, `ResourceRef`, `ConstraintSpec`)
//! - `services/` - Normalization, validation and evaluation
//! - `ports/` - Trait definitions for the catalog, reference parser and diagnostics
//! - `error` - Error types for each stage

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the constraint engine
//! and the host that owns the configuration graph.
//!
//! Implementations live in the `adapters` module or in the host.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete catalogs.
//! Tests drive the engine with in-memory implementations.

mod catalog;
mod declaration_source;
mod diagnostics;
mod reference_parser;

pub use catalog::{Catalog, Resource};
pub use declaration_source::DeclarationSource;
pub use diagnostics::{DiagnosticSink, Level, LogSink};
pub use reference_parser::{ReferenceParser, StandardReferenceParser};

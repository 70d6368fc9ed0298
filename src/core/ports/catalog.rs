//! Catalog port
//!
//! Defines the read-only view of the configuration graph that constraints
//! are checked against.

use super::super::models::{ResourceRef, Token};

/// A resource in the catalog
pub trait Resource {
    /// Identity used in diagnostics, e.g. `File[/etc/motd]`
    fn identity(&self) -> String;

    /// Current value of a property, `None` if unset
    fn get(&self, property: &Token) -> Option<Token>;
}

/// The configuration graph
///
/// Implementations must be fully populated before a check runs. Checks only
/// ever read from the catalog.
pub trait Catalog: Send + Sync {
    /// Look up a resource by reference
    fn resolve(&self, reference: &ResourceRef) -> Option<&dyn Resource>;
}

//! Domain models for constrain
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RawDeclaration`] / [`RawValue`] - Declarations as written
//! - [`Token`] - A canonicalized string
//! - [`ResourceRef`] - `Type[title]` reference into the catalog
//! - [`PropertyRestriction`] - Allowed or forbidden values for one property
//! - [`ConstraintSpec`] - A validated, immutable declaration
//! - [`Violation`] - A property value that breaks a rule

mod raw;
mod reference;
mod restriction;
mod spec;
mod token;
mod violation;

pub use raw::{RawDeclaration, RawValue};
pub use reference::{ReferenceError, ResourceRef};
pub use restriction::{ListKind, PropertyRestriction, RestrictionKind, ValueSet};
pub use spec::{ConstraintSpec, Mode, ParsedSpec, RuleSet};
pub use token::{Canonical, Token, canonicalize};
pub use violation::Violation;

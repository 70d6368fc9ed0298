//! Error types for each stage
//!
//! - [`ShapeError`] - parse stage, malformed raw input
//! - [`SemanticError`] - semantic stage, cross-field rules and references
//! - [`DeclarationError`] - either of the above, for one-shot construction
//! - [`CheckError`] - evaluation against a catalog

use thiserror::Error;

use super::models::{ReferenceError, ResourceRef, Violation};

/// Malformed raw declaration input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A parameter does not have an accepted shape
    #[error("invalid {param}: {message}")]
    InvalidShape {
        /// Parameter name (`resource`, `properties`, `allow`, `forbid`, `name`)
        param: &'static str,
        /// What is wrong
        message: String,
    },

    /// Canonicalization was handed a shape outside its domain
    #[error("internal shape error: {message}")]
    Internal {
        /// What could not be canonicalized
        message: String,
    },
}

impl ShapeError {
    /// Create an invalid shape error for a parameter
    #[must_use]
    pub fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            param,
            message: message.into(),
        }
    }
}

/// Cross-field or reference problems in a parsed declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Mutually exclusive parameters were combined, or allow and forbid overlap
    #[error("constraint {name}: {message}")]
    ConfigConflict {
        /// Declaration name
        name: String,
        /// Properties involved in the conflict, if any
        properties: Vec<String>,
        /// What conflicts
        message: String,
    },

    /// No resource was given
    #[error("constraint {name}: a resource reference is required")]
    MissingTarget {
        /// Declaration name
        name: String,
    },

    /// Neither `properties` nor `allow`/`forbid` has any rules
    #[error("constraint {name}: no rules given; set properties, or allow and/or forbid")]
    MissingRules {
        /// Declaration name
        name: String,
    },

    /// A target is not a valid resource reference
    #[error("constraint {name}: invalid resource '{reference}': {source}")]
    InvalidTarget {
        /// Declaration name
        name: String,
        /// The raw reference string
        reference: String,
        /// Why it did not parse
        source: ReferenceError,
    },

    /// Two declarations share a name
    #[error("duplicate constraint name '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
}

/// Any failure building a [`ConstraintSpec`](super::models::ConstraintSpec)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// Parse stage failure
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Semantic stage failure
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Failure of a check against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A target does not exist in the catalog and the constraint is not weak
    #[error("constraint {constraint}: the resource {reference} cannot be found in the catalog")]
    UnresolvedTarget {
        /// `Constraint[name]` of the declaration
        constraint: String,
        /// The missing reference
        reference: ResourceRef,
    },

    /// A resolved resource breaks a rule
    #[error(transparent)]
    Violation(#[from] Violation),
}

impl CheckError {
    /// `Constraint[name]` of the failing declaration
    #[must_use]
    pub fn constraint(&self) -> &str {
        match self {
            Self::UnresolvedTarget { constraint, .. } => constraint,
            Self::Violation(violation) => violation.constraint(),
        }
    }
}

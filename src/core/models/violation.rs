//! Rule violations found on a resolved resource

use serde::Serialize;
use thiserror::Error;

use super::{Token, ValueSet};

/// A resource property value that breaks a rule
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The value is not among the allowed values
    #[error(
        "constraint {constraint} check failed - {resource}/{property} is {} which is not among the allowed {allowed}",
        display_actual(.actual.as_ref())
    )]
    ValueNotAllowed {
        /// `Constraint[name]` of the failing declaration
        constraint: String,
        /// Identity of the resource
        resource: String,
        /// The checked property
        property: Token,
        /// The value found, `None` if the property is unset
        actual: Option<Token>,
        /// The allowed values
        allowed: ValueSet,
    },

    /// The value is one of the forbidden values
    #[error(
        "constraint {constraint} check failed - {resource}/{property} is '{actual}' which is forbidden"
    )]
    ValueForbidden {
        /// `Constraint[name]` of the failing declaration
        constraint: String,
        /// Identity of the resource
        resource: String,
        /// The checked property
        property: Token,
        /// The forbidden value found
        actual: Token,
    },
}

impl Violation {
    /// `Constraint[name]` of the violated declaration
    #[must_use]
    pub fn constraint(&self) -> &str {
        match self {
            Self::ValueNotAllowed { constraint, .. } | Self::ValueForbidden { constraint, .. } => {
                constraint
            },
        }
    }

    /// Identity of the offending resource
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            Self::ValueNotAllowed { resource, .. } | Self::ValueForbidden { resource, .. } => resource,
        }
    }

    /// The offending property
    #[must_use]
    pub const fn property(&self) -> &Token {
        match self {
            Self::ValueNotAllowed { property, .. } | Self::ValueForbidden { property, .. } => property,
        }
    }
}

fn display_actual(actual: Option<&Token>) -> String {
    actual.map_or_else(|| "unset".to_string(), |value| format!("'{value}'"))
}

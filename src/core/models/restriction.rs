//! Property restrictions
//!
//! A restriction either allows or forbids a set of values for one property.

use std::fmt;

use serde::Serialize;

use super::Token;

/// Non-empty set of canonical values, kept in declared order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueSet(Vec<Token>);

impl ValueSet {
    /// Build a value set, or `None` if there are no values
    #[must_use]
    pub fn new(values: Vec<Token>) -> Option<Self> {
        if values.is_empty() { None } else { Some(Self(values)) }
    }

    /// Membership test, ignoring order
    #[must_use]
    pub fn contains(&self, value: &Token) -> bool {
        self.0.contains(value)
    }

    /// Values in declared order
    #[must_use]
    pub fn values(&self) -> &[Token] {
        &self.0
    }

    /// Number of declared values
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no values; never true for a constructed set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(Token::as_str).collect();
        write!(f, "[{}]", joined.join(","))
    }
}

/// What a rule does with its value set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionKind {
    /// The property value must be one of the values
    Allowed,
    /// The property value must not be one of the values
    Forbidden,
}

impl RestrictionKind {
    /// Recognize the second-level key of a property rule
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "allowed" => Some(Self::Allowed),
            "forbidden" => Some(Self::Forbidden),
            _ => None,
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::Forbidden => write!(f, "forbidden"),
        }
    }
}

/// Restriction on a single property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyRestriction {
    /// Value must be a member of the set
    Allowed(ValueSet),
    /// Value must not be a member of the set
    Forbidden(ValueSet),
}

impl PropertyRestriction {
    /// Pair a kind with its values
    #[must_use]
    pub const fn from_parts(kind: RestrictionKind, values: ValueSet) -> Self {
        match kind {
            RestrictionKind::Allowed => Self::Allowed(values),
            RestrictionKind::Forbidden => Self::Forbidden(values),
        }
    }

    /// The restriction kind
    #[must_use]
    pub const fn kind(&self) -> RestrictionKind {
        match self {
            Self::Allowed(_) => RestrictionKind::Allowed,
            Self::Forbidden(_) => RestrictionKind::Forbidden,
        }
    }

    /// The restricted values
    #[must_use]
    pub const fn values(&self) -> &ValueSet {
        match self {
            Self::Allowed(values) | Self::Forbidden(values) => values,
        }
    }
}

impl fmt::Display for PropertyRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.values())
    }
}

/// Which of the paired list parameters a value map came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// The `allow` parameter
    Allow,
    /// The `forbid` parameter
    Forbid,
}

impl ListKind {
    /// Parameter name as written in declarations
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Forbid => "forbid",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

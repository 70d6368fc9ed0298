//! Constraint specifications
//!
//! [`ParsedSpec`] is the output of the parse stage: every value has a known
//! shape and has been canonicalized, but references are still strings and
//! no cross-field rule has been checked. [`ConstraintSpec`] is the output of
//! the semantic stage and is immutable.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::{PropertyRestriction, ResourceRef, Token, ValueSet};

/// Result of the parse stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSpec {
    /// Declaration name
    pub name: String,
    /// Target references, not yet parsed
    pub targets: Vec<String>,
    /// Normalized `properties` parameter, if given
    pub properties: Option<IndexMap<Token, PropertyRestriction>>,
    /// Normalized `allow` parameter, if given
    pub allow: Option<IndexMap<Token, ValueSet>>,
    /// Normalized `forbid` parameter, if given
    pub forbid: Option<IndexMap<Token, ValueSet>>,
    /// Weak missing-reference policy
    pub weak: bool,
}

/// Which surface syntax a spec's rules came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The `properties` parameter
    PropertyRules,
    /// The paired `allow`/`forbid` parameters
    AllowForbidLists,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyRules => write!(f, "properties"),
            Self::AllowForbidLists => write!(f, "allow/forbid"),
        }
    }
}

/// The rules of a spec; exactly one mode is ever populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Per-property restrictions, checked in declared order
    PropertyRules(IndexMap<Token, PropertyRestriction>),
    /// Allow entries then forbid entries; key sets are disjoint
    AllowForbidLists {
        /// Properties that must take one of the listed values
        allow: IndexMap<Token, ValueSet>,
        /// Properties that must not take any of the listed values
        forbid: IndexMap<Token, ValueSet>,
    },
}

impl RuleSet {
    /// The mode of this rule set
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::PropertyRules(_) => Mode::PropertyRules,
            Self::AllowForbidLists { .. } => Mode::AllowForbidLists,
        }
    }

    /// Every rule in evaluation order
    ///
    /// For allow/forbid lists, all allow entries come before all forbid entries.
    #[must_use]
    pub fn rules(&self) -> Vec<(&Token, PropertyRestriction)> {
        match self {
            Self::PropertyRules(rules) => {
                rules.iter().map(|(property, restriction)| (property, restriction.clone())).collect()
            },
            Self::AllowForbidLists { allow, forbid } => allow
                .iter()
                .map(|(property, values)| (property, PropertyRestriction::Allowed(values.clone())))
                .chain(
                    forbid.iter().map(|(property, values)| {
                        (property, PropertyRestriction::Forbidden(values.clone()))
                    }),
                )
                .collect(),
        }
    }

    /// Number of property entries
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::PropertyRules(rules) => rules.len(),
            Self::AllowForbidLists { allow, forbid } => allow.len() + forbid.len(),
        }
    }

    /// Whether there are no entries; never true for a validated spec
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (property, restriction)) in self.rules().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{property} => {restriction}")?;
        }
        f.write_str("}")
    }
}

/// A validated, immutable constraint declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintSpec {
    name: String,
    targets: Vec<ResourceRef>,
    rules: RuleSet,
    weak: bool,
}

impl ConstraintSpec {
    /// Assemble a spec from parts that have already been validated
    pub(crate) const fn from_validated(
        name: String,
        targets: Vec<ResourceRef>,
        rules: RuleSet,
        weak: bool,
    ) -> Self {
        Self {
            name,
            targets,
            rules,
            weak,
        }
    }

    /// Declaration name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Constraint[name]`, the identity used in diagnostics
    #[must_use]
    pub fn reference(&self) -> String {
        format!("Constraint[{}]", self.name)
    }

    /// Targets in declared order, duplicates included
    #[must_use]
    pub fn targets(&self) -> &[ResourceRef] {
        &self.targets
    }

    /// The rule set
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The rule mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.rules.mode()
    }

    /// Whether missing targets are skipped
    #[must_use]
    pub const fn is_weak(&self) -> bool {
        self.weak
    }
}

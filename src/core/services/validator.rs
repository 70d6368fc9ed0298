//! Semantic stage: [`ParsedSpec`] to [`ConstraintSpec`]
//!
//! Checks, in order:
//!
//! 1. at least one target is declared (`MissingTarget`)
//! 2. every target parses as a reference (`InvalidTarget`)
//! 3. `properties` is not combined with `allow`/`forbid` (`ConfigConflict`)
//! 4. `allow` and `forbid` name disjoint properties (`ConfigConflict`)
//! 5. some rule is given (`MissingRules`)
//!
//! A parameter given as an empty hash counts as not given.

use indexmap::IndexMap;

use crate::core::error::{DeclarationError, SemanticError};
use crate::core::models::{ConstraintSpec, ParsedSpec, RawDeclaration, RuleSet, Token};
use crate::core::ports::{ReferenceParser, StandardReferenceParser};

use super::normalizer::parse_stage;

/// Run the semantic stage over a parsed declaration
pub fn semantic_stage(
    parsed: ParsedSpec,
    parser: &dyn ReferenceParser,
) -> Result<ConstraintSpec, SemanticError> {
    let ParsedSpec {
        name,
        targets: raw_targets,
        properties,
        allow,
        forbid,
        weak,
    } = parsed;

    if raw_targets.is_empty() {
        return Err(SemanticError::MissingTarget { name });
    }

    let mut targets = Vec::with_capacity(raw_targets.len());
    for raw in &raw_targets {
        match parser.parse(raw) {
            Ok(parsed) => targets.extend(parsed),
            Err(source) => {
                return Err(SemanticError::InvalidTarget {
                    name,
                    reference: raw.clone(),
                    source,
                });
            },
        }
    }

    let properties = properties.filter(|rules| !rules.is_empty());
    let allow = allow.filter(|lists| !lists.is_empty());
    let forbid = forbid.filter(|lists| !lists.is_empty());

    let rules = match (properties, allow, forbid) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err(SemanticError::ConfigConflict {
                name,
                properties: Vec::new(),
                message: "properties cannot be combined with allow or forbid".to_string(),
            });
        },
        (Some(rules), None, None) => RuleSet::PropertyRules(rules),
        (None, None, None) => return Err(SemanticError::MissingRules { name }),
        (None, allow, forbid) => {
            let allow = allow.unwrap_or_default();
            let forbid = forbid.unwrap_or_default();
            let overlap = overlapping_properties(&allow, &forbid);
            if !overlap.is_empty() {
                return Err(SemanticError::ConfigConflict {
                    name,
                    message: format!(
                        "properties cannot be both allowed and forbidden: {}",
                        overlap.join(", ")
                    ),
                    properties: overlap,
                });
            }
            RuleSet::AllowForbidLists { allow, forbid }
        },
    };

    log::debug!("validated constraint {name}: {} target(s), {} mode", targets.len(), rules.mode());
    Ok(ConstraintSpec::from_validated(name, targets, rules, weak))
}

/// Property names present in both maps, in `allow` order
fn overlapping_properties<V, W>(allow: &IndexMap<Token, V>, forbid: &IndexMap<Token, W>) -> Vec<String> {
    allow
        .keys()
        .filter(|property| forbid.contains_key(*property))
        .map(ToString::to_string)
        .collect()
}

/// Validate a parsed spec with the standard reference parser
pub fn validate_spec(parsed: ParsedSpec) -> Result<ConstraintSpec, SemanticError> {
    semantic_stage(parsed, &StandardReferenceParser)
}

impl ConstraintSpec {
    /// Build a spec from a raw declaration, running both stages
    pub fn from_declaration(
        declaration: &RawDeclaration,
        parser: &dyn ReferenceParser,
    ) -> Result<Self, DeclarationError> {
        let parsed = parse_stage(declaration)?;
        Ok(semantic_stage(parsed, parser)?)
    }

    /// Build a spec from a raw declaration with `Type[title]` references
    pub fn parse(declaration: &RawDeclaration) -> Result<Self, DeclarationError> {
        Self::from_declaration(declaration, &StandardReferenceParser)
    }
}

//! Parse stage: raw declaration to [`ParsedSpec`]
//!
//! Every accepted surface syntax collapses to one canonical form here:
//!
//! ```text
//! properties = { ensure = "present" }                       -> ensure: allowed [present]
//! properties = { ensure = ["present", "latest"] }           -> ensure: allowed [present,latest]
//! properties = { ensure = { forbidden = "absent" } }        -> ensure: forbidden [absent]
//! allow = { ensure = [["present"], "latest"] }              -> ensure: [present,latest]
//! ```
//!
//! All functions here are pure. Reference strings are collected but not
//! parsed; that happens in the semantic stage.

use indexmap::IndexMap;

use crate::core::error::ShapeError;
use crate::core::models::{
    Canonical, ListKind, ParsedSpec, PropertyRestriction, RawDeclaration, RawValue,
    RestrictionKind, Token, ValueSet, canonicalize,
};

const RESOURCE: &str = "resource";
const PROPERTIES: &str = "properties";

/// Run the parse stage over one declaration
pub fn parse_stage(declaration: &RawDeclaration) -> Result<ParsedSpec, ShapeError> {
    let name = declaration.name.trim();
    if name.is_empty() {
        return Err(ShapeError::invalid("name", "a constraint needs a non-empty name"));
    }

    let targets = declaration.resource.as_ref().map(normalize_targets).transpose()?.unwrap_or_default();
    let properties = declaration.properties.as_ref().map(normalize_property_rules).transpose()?;
    let allow = declaration
        .allow
        .as_ref()
        .map(|raw| normalize_allow_forbid_list(raw, ListKind::Allow))
        .transpose()?;
    let forbid = declaration
        .forbid
        .as_ref()
        .map(|raw| normalize_allow_forbid_list(raw, ListKind::Forbid))
        .transpose()?;

    log::debug!(
        "parsed constraint {name}: {} target(s), properties={}, allow={}, forbid={}",
        targets.len(),
        properties.as_ref().map_or(0, IndexMap::len),
        allow.as_ref().map_or(0, IndexMap::len),
        forbid.as_ref().map_or(0, IndexMap::len),
    );

    Ok(ParsedSpec {
        name: name.to_string(),
        targets,
        properties,
        allow,
        forbid,
        weak: declaration.weak,
    })
}

/// Normalize the `resource` parameter to an ordered list of reference strings
///
/// A single string becomes a one-element list. Lists keep their order and
/// duplicates; one level of nested lists is flattened.
pub fn normalize_targets(raw: &RawValue) -> Result<Vec<String>, ShapeError> {
    match raw {
        RawValue::Scalar(s) => Ok(vec![s.clone()]),
        RawValue::List(items) => {
            let mut targets = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    RawValue::Scalar(s) => targets.push(s.clone()),
                    RawValue::List(inner) => {
                        for nested in inner {
                            let RawValue::Scalar(s) = nested else {
                                return Err(ShapeError::invalid(
                                    RESOURCE,
                                    format!("references nest at most one level deep, got {nested}"),
                                ));
                            };
                            targets.push(s.clone());
                        }
                    },
                    other => {
                        return Err(ShapeError::invalid(
                            RESOURCE,
                            format!("expected a reference string, got {} {other}", other.kind()),
                        ));
                    },
                }
            }
            Ok(targets)
        },
        other => Err(ShapeError::invalid(
            RESOURCE,
            format!("expected a reference or an array of references, got {} {other}", other.kind()),
        )),
    }
}

/// Normalize the `properties` parameter
///
/// Each property maps to a bare value or list (allowed by default), or to a
/// hash with exactly one key, `allowed` or `forbidden`.
pub fn normalize_property_rules(
    raw: &RawValue,
) -> Result<IndexMap<Token, PropertyRestriction>, ShapeError> {
    let RawValue::Map(entries) = raw else {
        return Err(ShapeError::invalid(
            PROPERTIES,
            format!("properties must be a hash (mapping), got {}", raw.kind()),
        ));
    };

    let mut rules = IndexMap::with_capacity(entries.len());
    for (property, value) in entries {
        let restriction = property_restriction(property, value)?;
        if rules.insert(Token::new(property), restriction).is_some() {
            return Err(ShapeError::invalid(
                PROPERTIES,
                format!("property '{}' is given more than once", Token::new(property)),
            ));
        }
    }
    Ok(rules)
}

fn property_restriction(property: &str, value: &RawValue) -> Result<PropertyRestriction, ShapeError> {
    check_rule_shape(property, value)?;

    // Unsupported leaves fall through to canonicalize and come back as internal errors.
    let (kind, values) = match canonicalize(value)? {
        Canonical::Map(rule) => {
            let Some((key, values)) = rule.into_iter().next() else {
                return Err(ShapeError::invalid(PROPERTIES, format!("the rule for '{property}' is empty")));
            };
            let kind = RestrictionKind::from_key(key.as_str()).ok_or_else(|| {
                ShapeError::invalid(
                    PROPERTIES,
                    format!("unknown key '{key}' in the rule for '{property}'; use allowed or forbidden"),
                )
            })?;
            (kind, values)
        },
        bare => (RestrictionKind::Allowed, bare),
    };

    let tokens = values.into_tokens().ok_or_else(|| ShapeError::Internal {
        message: format!("the {kind} values of '{property}' canonicalized to a hash"),
    })?;
    let set = ValueSet::new(tokens).ok_or_else(|| {
        ShapeError::invalid(PROPERTIES, format!("the {kind} values of '{property}' must not be empty"))
    })?;

    Ok(PropertyRestriction::from_parts(kind, set))
}

/// Reject rule shapes that canonicalization cannot express
fn check_rule_shape(property: &str, value: &RawValue) -> Result<(), ShapeError> {
    let (label, values) = match value {
        RawValue::Map(inner) => {
            let Some((key, inner_value)) = inner.iter().next() else {
                return Err(ShapeError::invalid(PROPERTIES, format!("the rule for '{property}' is empty")));
            };
            if inner.len() != 1 {
                return Err(ShapeError::invalid(
                    PROPERTIES,
                    format!(
                        "the rule for '{property}' must have exactly one key, allowed or forbidden; got {value}"
                    ),
                ));
            }
            if matches!(inner_value, RawValue::Map(_)) {
                return Err(ShapeError::invalid(
                    PROPERTIES,
                    format!("the {} values of '{property}' must be a string or an array, got a hash", key.trim()),
                ));
            }
            (key.trim(), inner_value)
        },
        other => ("allowed", other),
    };

    if values.is_empty_collection() {
        return Err(ShapeError::invalid(
            PROPERTIES,
            format!("the {label} values of '{property}' must not be empty"),
        ));
    }
    if let RawValue::List(items) = values {
        let nested = items.iter().find(|item| matches!(item, RawValue::List(_) | RawValue::Map(_)));
        if let Some(nested) = nested {
            return Err(ShapeError::invalid(
                PROPERTIES,
                format!("the {label} values of '{property}' must be strings, got {nested}"),
            ));
        }
    }
    Ok(())
}

/// Normalize the `allow` or `forbid` parameter
///
/// Each property maps to a string or an array; arrays may nest one level and
/// are flattened. Every leaf must be a string.
pub fn normalize_allow_forbid_list(
    raw: &RawValue,
    kind: ListKind,
) -> Result<IndexMap<Token, ValueSet>, ShapeError> {
    let param = kind.param();
    let RawValue::Map(entries) = raw else {
        return Err(ShapeError::invalid(
            param,
            format!("{param} must be a hash (mapping), got {}", raw.kind()),
        ));
    };

    let mut lists = IndexMap::with_capacity(entries.len());
    for (property, value) in entries {
        let leaves = flatten_one_level(param, property, value)?;
        let tokens = canonicalize(&RawValue::List(leaves))?.into_tokens().unwrap_or_default();
        let set = ValueSet::new(tokens).ok_or_else(|| {
            ShapeError::invalid(param, format!("the values of '{property}' must not be empty"))
        })?;
        if lists.insert(Token::new(property), set).is_some() {
            return Err(ShapeError::invalid(
                param,
                format!("property '{}' is given more than once", Token::new(property)),
            ));
        }
    }
    Ok(lists)
}

fn flatten_one_level(
    param: &'static str,
    property: &str,
    value: &RawValue,
) -> Result<Vec<RawValue>, ShapeError> {
    let not_a_string =
        |leaf: &RawValue| ShapeError::invalid(param, format!("the values of '{property}' must be strings, got {leaf}"));

    match value {
        RawValue::Scalar(_) => Ok(vec![value.clone()]),
        RawValue::List(items) => {
            let mut leaves = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    RawValue::Scalar(_) => leaves.push(item.clone()),
                    RawValue::List(inner) => {
                        for leaf in inner {
                            if !matches!(leaf, RawValue::Scalar(_)) {
                                return Err(not_a_string(leaf));
                            }
                            leaves.push(leaf.clone());
                        }
                    },
                    other => return Err(not_a_string(other)),
                }
            }
            Ok(leaves)
        },
        other => Err(not_a_string(other)),
    }
}

//! Parameterized tests using test-case
//!
//! These tests run the same normalization logic over tables of raw shapes.

use constrain::core::error::ShapeError;
use constrain::core::models::{ListKind, RawValue, RestrictionKind};
use constrain::core::services::{normalize_allow_forbid_list, normalize_property_rules, normalize_targets};
use test_case::test_case;

fn json(raw: &str) -> RawValue {
    serde_json::from_str(raw).expect("valid raw value")
}

// =============================================================================
// Property rules
// =============================================================================

#[test_case(r#"{"ensure": "present"}"#, RestrictionKind::Allowed ; "bare string defaults to allowed")]
#[test_case(r#"{"ensure": ["present", "latest"]}"#, RestrictionKind::Allowed ; "bare list defaults to allowed")]
#[test_case(r#"{"ensure": {"allowed": "present"}}"#, RestrictionKind::Allowed ; "explicit allowed")]
#[test_case(r#"{"ensure": {"forbidden": ["absent"]}}"#, RestrictionKind::Forbidden ; "explicit forbidden")]
#[test_case(r#"{"ensure": {" forbidden ": "absent"}}"#, RestrictionKind::Forbidden ; "rule key is trimmed")]
fn test_property_rule_kind(raw: &str, expected: RestrictionKind) {
    let rules = normalize_property_rules(&json(raw)).unwrap();
    assert_eq!(rules["ensure"].kind(), expected);
}

#[test_case(r#"[]"# ; "array instead of hash")]
#[test_case(r#""present""# ; "string instead of hash")]
#[test_case(r#"{"ensure": {"allowed": "a", "forbidden": "b"}}"# ; "two rule keys")]
#[test_case(r#"{"ensure": {}}"# ; "no rule key")]
#[test_case(r#"{"ensure": {"required": "a"}}"# ; "unknown rule key")]
#[test_case(r#"{"ensure": {"allowed": {"x": "y"}}}"# ; "third nesting level")]
#[test_case(r#"{"ensure": [["present"]]}"# ; "nested list")]
#[test_case(r#"{"ensure": []}"# ; "empty value list")]
#[test_case(r#"{"ensure": "a", " ensure": "b"}"# ; "duplicate canonical property")]
fn test_property_rules_invalid_shape(raw: &str) {
    let err = normalize_property_rules(&json(raw)).unwrap_err();
    assert!(matches!(err, ShapeError::InvalidShape { param: "properties", .. }), "{err}");
}

#[test_case(r#"{"mode": 644}"# ; "integer leaf")]
#[test_case(r#"{"ensure": [true]}"# ; "boolean in list")]
fn test_property_rules_unsupported_leaf(raw: &str) {
    assert!(matches!(normalize_property_rules(&json(raw)), Err(ShapeError::Internal { .. })));
}

// =============================================================================
// Allow / forbid lists
// =============================================================================

#[test_case(r#"{"ensure": "present"}"#, &["present"] ; "single string")]
#[test_case(r#"{"ensure": ["present", "latest"]}"#, &["present", "latest"] ; "flat list")]
#[test_case(r#"{"ensure": [["present"], "latest"]}"#, &["present", "latest"] ; "one level flattened")]
fn test_allow_list_values(raw: &str, expected: &[&str]) {
    let lists = normalize_allow_forbid_list(&json(raw), ListKind::Allow).unwrap();
    let values: Vec<&str> = lists["ensure"].values().iter().map(|token| token.as_str()).collect();
    assert_eq!(values, expected);
}

#[test_case(r#"["ensure"]"#, ListKind::Allow ; "allow array")]
#[test_case(r#"{"ensure": [[["x"]]]}"#, ListKind::Forbid ; "forbid too deep")]
#[test_case(r#"{"ensure": []}"#, ListKind::Forbid ; "forbid empty")]
#[test_case(r#"{"ensure": null}"#, ListKind::Allow ; "allow null")]
fn test_allow_forbid_invalid_shape(raw: &str, kind: ListKind) {
    let err = normalize_allow_forbid_list(&json(raw), kind).unwrap_err();
    match err {
        ShapeError::InvalidShape { param, .. } => assert_eq!(param, kind.param()),
        ShapeError::Internal { .. } => panic!("expected InvalidShape, got {err}"),
    }
}

// =============================================================================
// Targets
// =============================================================================

#[test_case(r#""File[a]""#, &["File[a]"] ; "single reference")]
#[test_case(r#"["File[a]", "File[b]"]"#, &["File[a]", "File[b]"] ; "list of references")]
#[test_case(r#"[["File[a]"], "File[b]"]"#, &["File[a]", "File[b]"] ; "one nested level")]
fn test_targets(raw: &str, expected: &[&str]) {
    assert_eq!(normalize_targets(&json(raw)).unwrap(), expected);
}

#[test_case(r#"{"File": "a"}"# ; "hash")]
#[test_case(r#"[[["File[a]"]]]"# ; "too deep")]
#[test_case("1" ; "number")]
fn test_targets_invalid_shape(raw: &str) {
    assert!(matches!(normalize_targets(&json(raw)), Err(ShapeError::InvalidShape { param: "resource", .. })));
}

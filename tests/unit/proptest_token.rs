//! Property-based tests for canonical tokens and rule normalization
//!
//! Uses proptest to verify properties that should hold for all inputs.

use constrain::core::error::ShapeError;
use constrain::core::models::{RawValue, RestrictionKind, Token};
use constrain::core::services::normalize_property_rules;
use indexmap::IndexMap;
use proptest::prelude::*;

fn rules(property: &str, value: RawValue) -> RawValue {
    RawValue::Map(IndexMap::from([(property.to_string(), value)]))
}

proptest! {
    /// Canonicalizing an identifier and displaying it yields the identifier
    #[test]
    fn token_round_trip(raw in "[A-Za-z0-9_./:-]{1,24}") {
        let token = Token::new(&raw);
        prop_assert_eq!(token.to_string(), raw.clone());
        prop_assert_eq!(String::from(token), raw);
    }

    /// Surrounding whitespace never changes the canonical token
    #[test]
    fn token_ignores_padding(raw in "[a-z]{1,12}", left in " {0,3}", right in "\t{0,2}") {
        prop_assert_eq!(Token::new(&format!("{left}{raw}{right}")), Token::new(&raw));
    }

    /// A bare string always normalizes to an allowed restriction
    #[test]
    fn bare_string_defaults_to_allow(property in "[a-z]{1,10}", value in "[a-z0-9]{1,10}") {
        let normalized = normalize_property_rules(&rules(&property, value.as_str().into())).unwrap();
        prop_assert_eq!(normalized[property.as_str()].kind(), RestrictionKind::Allowed);
    }

    /// A bare list always normalizes to an allowed restriction, keeping every value
    #[test]
    fn bare_list_defaults_to_allow(
        property in "[a-z]{1,10}",
        values in prop::collection::vec("[a-z0-9]{1,8}", 1..6)
    ) {
        let raw = RawValue::List(values.iter().map(|v| v.as_str().into()).collect());
        let normalized = normalize_property_rules(&rules(&property, raw)).unwrap();
        let restriction = &normalized[property.as_str()];
        prop_assert_eq!(restriction.kind(), RestrictionKind::Allowed);
        prop_assert_eq!(restriction.values().len(), values.len());
    }

    /// Any rule key outside allowed/forbidden is rejected
    #[test]
    fn unknown_rule_key_rejected(key in "[a-z]{1,10}") {
        prop_assume!(key != "allowed" && key != "forbidden");
        let raw = rules("ensure", RawValue::Map(IndexMap::from([(key, "present".into())])));
        let is_invalid_shape = matches!(
            normalize_property_rules(&raw),
            Err(ShapeError::InvalidShape { .. })
        );
        prop_assert!(is_invalid_shape);
    }
}

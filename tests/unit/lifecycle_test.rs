//! Tests for the pre-execution validation phase

use constrain::adapters::catalog::StaticCatalog;
use constrain::core::error::{CheckError, DeclarationError, SemanticError};
use constrain::core::models::RawDeclaration;
use constrain::core::ports::StandardReferenceParser;
use constrain::core::services::ConstraintSet;

use crate::common::{RecordingSink, declaration, resource, spec};

fn ensure(name: &str, target: &str, value: &str) -> RawDeclaration {
    declaration(&format!(
        "name = \"{name}\"\nresource = \"{target}\"\nproperties = {{ ensure = \"{value}\" }}\n"
    ))
}

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_resource(resource("File", "a", &[("ensure", "present")]))
        .with_resource(resource("File", "b", &[("ensure", "absent")]))
}

#[test]
fn test_pre_execution_validation_passes() {
    let set = ConstraintSet::from_declarations(
        &[ensure("a", "File[a]", "present"), ensure("b", "File[b]", "absent")],
        &StandardReferenceParser,
    )
    .unwrap();
    let sink = RecordingSink::new();

    let outcomes = set.pre_execution_validation(&catalog(), &sink).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|outcome| outcome.passed()));
}

#[test]
fn test_pre_execution_validation_stops_at_first_failure() {
    let set = ConstraintSet::from_declarations(
        &[
            ensure("first", "File[b]", "present"),
            ensure("second", "File[missing]", "present"),
        ],
        &StandardReferenceParser,
    )
    .unwrap();
    let sink = RecordingSink::new();

    let err = set.pre_execution_validation(&catalog(), &sink).unwrap_err();

    assert!(matches!(err, CheckError::Violation(_)));
    assert_eq!(err.constraint(), "Constraint[first]");
    assert_eq!(sink.errors().len(), 1);
}

#[test]
fn test_legacy_verdict_evaluates_every_constraint() {
    let set = ConstraintSet::from_declarations(
        &[
            ensure("first", "File[b]", "present"),
            ensure("second", "File[missing]", "present"),
        ],
        &StandardReferenceParser,
    )
    .unwrap();
    let sink = RecordingSink::new();

    assert!(!set.check_catalog_validity(&catalog(), &sink));
    // one violation plus one unresolved target
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn test_evaluate_all_keeps_each_result() {
    let set = ConstraintSet::new(vec![
        spec("name = \"ok\"\nresource = \"File[a]\"\nproperties = { ensure = \"present\" }"),
        spec("name = \"bad\"\nresource = \"File[b]\"\nproperties = { ensure = \"present\" }"),
    ])
    .unwrap();
    let sink = RecordingSink::new();
    let catalog = catalog();

    let results = set.evaluate_all(&catalog, &sink);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0.name(), "ok");
    assert!(results[0].1.as_ref().unwrap().passed());
    assert!(!results[1].1.as_ref().unwrap().passed());
}

#[test]
fn test_duplicate_names_rejected() {
    let err = ConstraintSet::from_declarations(
        &[ensure("same", "File[a]", "present"), ensure("same", "File[b]", "absent")],
        &StandardReferenceParser,
    )
    .unwrap_err();

    assert_eq!(
        err,
        DeclarationError::Semantic(SemanticError::DuplicateName {
            name: "same".to_string()
        })
    );
}

#[test]
fn test_empty_set_is_valid() {
    let set = ConstraintSet::from_declarations(&[], &StandardReferenceParser).unwrap();
    let sink = RecordingSink::new();

    assert!(set.is_empty());
    assert!(set.check_catalog_validity(&StaticCatalog::new(), &sink));
    assert!(sink.messages().is_empty());
}

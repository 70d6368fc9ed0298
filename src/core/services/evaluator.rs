//! Evaluation of specs against a catalog
//!
//! Targets are walked in declared order. A missing target aborts the check
//! unless the spec is weak, in which case it is skipped with a warning. The
//! first violating resource ends the walk; one error diagnostic is emitted
//! for it.

use serde::Serialize;

use crate::core::error::CheckError;
use crate::core::models::{ConstraintSpec, PropertyRestriction, ResourceRef, Violation};
use crate::core::ports::{Catalog, DiagnosticSink, Resource};

/// What one evaluation of a spec saw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Name of the evaluated spec
    pub constraint: String,
    /// Identities of resources that passed every rule
    pub checked: Vec<String>,
    /// Targets skipped because they are missing (weak specs only)
    pub skipped: Vec<ResourceRef>,
    /// The first violation found, if any
    pub violation: Option<Violation>,
}

impl Outcome {
    fn new(spec: &ConstraintSpec) -> Self {
        Self {
            constraint: spec.name().to_string(),
            checked: Vec::new(),
            skipped: Vec::new(),
            violation: None,
        }
    }

    /// Whether the spec held for every resolvable target
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Checks specs against a catalog, reporting to a sink
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    catalog: &'a dyn Catalog,
    sink: &'a dyn DiagnosticSink,
}

impl std::fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a fully populated catalog
    #[must_use]
    pub fn new(catalog: &'a dyn Catalog, sink: &'a dyn DiagnosticSink) -> Self {
        Self { catalog, sink }
    }

    /// Walk the spec's targets and check each resolved resource
    ///
    /// Returns `Err` only for a missing target on a strict spec. A violation
    /// is reported in the outcome.
    pub fn evaluate(&self, spec: &ConstraintSpec) -> Result<Outcome, CheckError> {
        let mut outcome = Outcome::new(spec);

        for target in spec.targets() {
            let Some(resource) = self.catalog.resolve(target) else {
                if spec.is_weak() {
                    self.sink.warn(&format!(
                        "constraint {} skipping {target}: the resource cannot be found in the catalog",
                        spec.reference()
                    ));
                    outcome.skipped.push(target.clone());
                    continue;
                }
                let err = CheckError::UnresolvedTarget {
                    constraint: spec.reference(),
                    reference: target.clone(),
                };
                self.sink.error(&err.to_string());
                return Err(err);
            };

            self.sink.debug(&format!(
                "Checking constraint {} on {} {}",
                spec.reference(),
                resource.identity(),
                spec.rules()
            ));

            if let Some(violation) = check_resource(resource, spec) {
                self.sink.error(&violation.to_string());
                outcome.violation = Some(violation);
                return Ok(outcome);
            }
            outcome.checked.push(resource.identity());
        }

        Ok(outcome)
    }

    /// The pre-run check: succeed, or fail with the reason
    pub fn pre_run_check(&self, spec: &ConstraintSpec) -> Result<Outcome, CheckError> {
        let mut outcome = self.evaluate(spec)?;
        match outcome.violation.take() {
            Some(violation) => Err(CheckError::Violation(violation)),
            None => Ok(outcome),
        }
    }

    /// Boolean verdict that never raises
    ///
    /// A missing target on a strict spec is a plain failure here.
    #[must_use]
    pub fn check_catalog_validity(&self, spec: &ConstraintSpec) -> bool {
        self.evaluate(spec).is_ok_and(|outcome| outcome.passed())
    }
}

/// Check one resource against every rule of a spec, stopping at the first violation
#[must_use]
pub fn check_resource(resource: &dyn Resource, spec: &ConstraintSpec) -> Option<Violation> {
    for (property, restriction) in spec.rules().rules() {
        let actual = resource.get(property);
        match restriction {
            PropertyRestriction::Allowed(allowed) => {
                if actual.as_ref().is_some_and(|value| allowed.contains(value)) {
                    continue;
                }
                return Some(Violation::ValueNotAllowed {
                    constraint: spec.reference(),
                    resource: resource.identity(),
                    property: property.clone(),
                    actual,
                    allowed,
                });
            },
            PropertyRestriction::Forbidden(forbidden) => {
                let Some(value) = actual else { continue };
                if !forbidden.contains(&value) {
                    continue;
                }
                return Some(Violation::ValueForbidden {
                    constraint: spec.reference(),
                    resource: resource.identity(),
                    property: property.clone(),
                    actual: value,
                });
            },
        }
    }
    None
}

//! The pre-execution validation phase
//!
//! A host builds a [`ConstraintSet`] from every declaration in its catalog,
//! finishes populating the catalog, and then calls
//! [`ConstraintSet::pre_execution_validation`] once, before any change is
//! applied.

use std::collections::HashSet;

use crate::core::error::{CheckError, DeclarationError, SemanticError};
use crate::core::models::{ConstraintSpec, RawDeclaration};
use crate::core::ports::{Catalog, DiagnosticSink, ReferenceParser};

use super::evaluator::{Evaluator, Outcome};

/// All constraint specs declared for one catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    specs: Vec<ConstraintSpec>,
}

impl ConstraintSet {
    /// Collect specs, rejecting duplicate names
    pub fn new(specs: Vec<ConstraintSpec>) -> Result<Self, SemanticError> {
        let mut seen = HashSet::with_capacity(specs.len());
        for spec in &specs {
            if !seen.insert(spec.name()) {
                return Err(SemanticError::DuplicateName {
                    name: spec.name().to_string(),
                });
            }
        }
        Ok(Self { specs })
    }

    /// Build specs from raw declarations, failing on the first bad one
    pub fn from_declarations(
        declarations: &[RawDeclaration],
        parser: &dyn ReferenceParser,
    ) -> Result<Self, DeclarationError> {
        let specs = declarations
            .iter()
            .map(|declaration| ConstraintSpec::from_declaration(declaration, parser))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(specs)?)
    }

    /// Specs in declaration order
    #[must_use]
    pub fn specs(&self) -> &[ConstraintSpec] {
        &self.specs
    }

    /// Number of specs
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether there are no specs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Run every spec's pre-run check, stopping at the first failure
    pub fn pre_execution_validation(
        &self,
        catalog: &dyn Catalog,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<Outcome>, CheckError> {
        log::debug!("pre-execution validation of {} constraint(s)", self.specs.len());
        let evaluator = Evaluator::new(catalog, sink);
        self.specs.iter().map(|spec| evaluator.pre_run_check(spec)).collect()
    }

    /// Legacy verdict: evaluate every spec, never raise
    #[must_use]
    pub fn check_catalog_validity(&self, catalog: &dyn Catalog, sink: &dyn DiagnosticSink) -> bool {
        let evaluator = Evaluator::new(catalog, sink);
        let mut valid = true;
        for spec in &self.specs {
            valid &= evaluator.check_catalog_validity(spec);
        }
        valid
    }

    /// Evaluate every spec and keep each result, for reporting
    #[must_use]
    pub fn evaluate_all(
        &self,
        catalog: &dyn Catalog,
        sink: &dyn DiagnosticSink,
    ) -> Vec<(&ConstraintSpec, Result<Outcome, CheckError>)> {
        let evaluator = Evaluator::new(catalog, sink);
        self.specs.iter().map(|spec| (spec, evaluator.evaluate(spec))).collect()
    }
}

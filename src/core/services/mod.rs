//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Nothing here performs I/O; catalogs and sinks arrive through ports.
//!
//! - [`normalizer`] - Parse stage: raw declarations to canonical shapes
//! - [`validator`] - Semantic stage: references and cross-field rules
//! - [`evaluator`] - Check specs against a catalog
//! - [`lifecycle`] - The pre-execution validation phase

pub mod evaluator;
pub mod lifecycle;
pub mod normalizer;
pub mod validator;

pub use evaluator::{Evaluator, Outcome, check_resource};
pub use lifecycle::ConstraintSet;
pub use normalizer::{
    normalize_allow_forbid_list, normalize_property_rules, normalize_targets, parse_stage,
};
pub use validator::{semantic_stage, validate_spec};

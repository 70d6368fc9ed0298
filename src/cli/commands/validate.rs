//! Validate declarations without a catalog

use constrain::config::Config;
use constrain::output::{OutputMode, SpecSummary, ValidationReport};

use super::load_constraints;

/// Normalize every declaration and print the resulting specs
pub fn validate(paths: &[String], config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let loaded = load_constraints(paths, config)?;

    let report = ValidationReport {
        files: loaded.files,
        constraints: loaded.set.specs().iter().map(SpecSummary::from).collect(),
    };
    report.render(mode);

    Ok(())
}

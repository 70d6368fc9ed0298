//! Evaluate constraints against a catalog

use std::path::PathBuf;

use constrain::adapters::catalog::StaticCatalog;
use constrain::config::{CheckMode, Config};
use constrain::core::ports::LogSink;
use constrain::output::{CheckReport, ConstraintReport, OutputMode};

use super::load_constraints;

/// Check every declared constraint against the catalog
///
/// Strict mode stops at the first failing constraint; legacy mode evaluates
/// all of them and reports each.
pub fn check(
    paths: &[String],
    catalog: Option<PathBuf>,
    check_mode: CheckMode,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let Some(catalog_path) = catalog.or_else(|| config.paths.catalog.clone()) else {
        anyhow::bail!(
            "No catalog given. Pass --catalog <FILE> or set paths.catalog in constrain.toml"
        );
    };

    let loaded = load_constraints(paths, config)?;
    let catalog = StaticCatalog::load(&catalog_path)?;

    let constraints = match check_mode {
        CheckMode::Strict => match loaded.set.pre_execution_validation(&catalog, &LogSink) {
            Ok(outcomes) => loaded
                .set
                .specs()
                .iter()
                .zip(&outcomes)
                .map(|(spec, outcome)| ConstraintReport::from_outcome(&spec.reference(), outcome))
                .collect(),
            Err(err) => vec![ConstraintReport::from_error(err.constraint(), &err)],
        },
        CheckMode::Legacy => loaded
            .set
            .evaluate_all(&catalog, &LogSink)
            .iter()
            .map(|(spec, result)| ConstraintReport::from_result(&spec.reference(), result))
            .collect(),
    };

    let report = CheckReport::new(&check_mode.to_string(), constraints);
    report.render(mode);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}

//! Command implementations

mod check;
mod validate;

pub use check::check;
pub use validate::validate;

use anyhow::Context;

use constrain::adapters::toml::TomlDeclarationSource;
use constrain::config::Config;
use constrain::core::models::ConstraintSpec;
use constrain::core::ports::{DeclarationSource, StandardReferenceParser};
use constrain::core::services::ConstraintSet;

/// Declarations loaded and validated from disk
struct Loaded {
    files: usize,
    set: ConstraintSet,
}

/// Read and validate every declaration under `paths` (or the configured defaults)
fn load_constraints(paths: &[String], config: &Config) -> anyhow::Result<Loaded> {
    let inputs = if paths.is_empty() {
        config.paths.constraints.clone()
    } else {
        paths.to_vec()
    };

    let source = TomlDeclarationSource::current_dir(inputs)?;
    let files = source.files()?.len();
    let parser = StandardReferenceParser;

    let mut specs = Vec::new();
    for (declaration, path) in source.load()? {
        let spec = ConstraintSpec::from_declaration(&declaration, &parser)
            .with_context(|| format!("in {}", path.display()))?;
        specs.push(spec);
    }

    let set = ConstraintSet::new(specs)?;
    log::debug!("loaded {} constraint(s) from {files} file(s)", set.len());
    Ok(Loaded { files, set })
}

//! TOML-based declaration source
//!
//! Implements the `DeclarationSource` port trait over declaration files.

use std::path::PathBuf;

use crate::core::models::RawDeclaration;
use crate::core::ports::DeclarationSource;

use super::parser::{find_declaration_files, load_file};

/// Declaration source backed by TOML files
#[derive(Debug, Clone)]
pub struct TomlDeclarationSource {
    /// Base directory that relative inputs are resolved against
    base_dir: PathBuf,

    /// Files, directories or glob patterns to read
    inputs: Vec<String>,
}

impl TomlDeclarationSource {
    /// Create a source reading `inputs` relative to `base_dir`
    #[must_use]
    pub const fn new(base_dir: PathBuf, inputs: Vec<String>) -> Self {
        Self { base_dir, inputs }
    }

    /// Create a source relative to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir(inputs: Vec<String>) -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, inputs))
    }

    /// The files this source currently resolves to
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid pattern or unreadable directory.
    pub fn files(&self) -> anyhow::Result<Vec<PathBuf>> {
        find_declaration_files(&self.inputs, &self.base_dir)
    }
}

impl DeclarationSource for TomlDeclarationSource {
    fn load(&self) -> anyhow::Result<Vec<(RawDeclaration, PathBuf)>> {
        let mut declarations = Vec::new();

        for path in self.files()? {
            let file = load_file(&path)?;
            log::debug!("{} declares {} constraint(s)", path.display(), file.constraints.len());
            declarations.extend(file.constraints.into_iter().map(|decl| (decl, path.clone())));
        }

        Ok(declarations)
    }
}

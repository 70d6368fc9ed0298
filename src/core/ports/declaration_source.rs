//! Declaration source port
//!
//! Defines where raw constraint declarations come from.

use std::path::PathBuf;

use super::super::models::RawDeclaration;

/// Source of raw constraint declarations
///
/// Implementations handle reading declarations from files or other
/// storage. Declarations are returned in a stable order.
pub trait DeclarationSource: Send + Sync {
    /// Load every declaration, paired with the file it came from
    fn load(&self) -> anyhow::Result<Vec<(RawDeclaration, PathBuf)>>;

    /// Load every declaration
    fn declarations(&self) -> anyhow::Result<Vec<RawDeclaration>> {
        Ok(self.load()?.into_iter().map(|(declaration, _)| declaration).collect())
    }
}

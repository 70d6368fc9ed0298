//! TOML parser for constraint declaration files
//!
//! Handles finding, reading and deserializing declaration files.
//!
//! ```toml
//! [[constraint]]
//! name = "motd"
//! resource = "File[/etc/motd]"
//! properties = { ensure = { forbidden = ["absent"] } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::core::models::RawDeclaration;

/// Extension of declaration files found when walking directories
pub const DECLARATION_EXTENSION: &str = "toml";

/// A declaration file
#[derive(Debug, Default, Deserialize)]
pub struct DeclarationFile {
    /// Constraints declared in this file
    #[serde(default, rename = "constraint")]
    pub constraints: Vec<RawDeclaration>,
}

/// Load declarations from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<DeclarationFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Parse declarations from TOML text
///
/// # Errors
///
/// Returns an error if the text is not a valid declaration file.
pub fn parse_str(content: &str) -> anyhow::Result<DeclarationFile> {
    Ok(toml::from_str(content)?)
}

/// Expand a list of inputs into declaration files
///
/// Each input may be a file, a directory (walked recursively for `*.toml`),
/// or a glob pattern. Results are sorted and deduplicated.
///
/// # Errors
///
/// Returns an error for an invalid glob pattern or an unreadable directory,
/// for a plain path that does not exist, and for a glob matching no files.
pub fn find_declaration_files(inputs: &[String], base: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = base.join(input);
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            for entry in WalkDir::new(&path).follow_links(true) {
                let entry = entry?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == DECLARATION_EXTENSION)
                {
                    files.push(entry.into_path());
                }
            }
        } else if is_glob(input) {
            let pattern = path.to_string_lossy();
            let before = files.len();
            for matched in glob::glob(&pattern).with_context(|| format!("invalid pattern {input}"))? {
                let matched = matched?;
                if matched.is_file() {
                    files.push(matched);
                }
            }
            if files.len() == before {
                anyhow::bail!("pattern {input} matches no declaration files");
            }
        } else {
            anyhow::bail!("no such declaration file or directory: {input}");
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

//! TOML-based declaration source
//!
//! Implements `DeclarationSource` using `[[constraint]]` tables in TOML files.
//!
//! - [`parser`] - Find, read and deserialize declaration files
//! - [`repository`] - `DeclarationSource` implementation

pub mod parser;
pub mod repository;

pub use parser::{DeclarationFile, find_declaration_files, load_file, parse_str};
pub use repository::TomlDeclarationSource;

//! Canonical tokens
//!
//! Every string that takes part in a comparison (property names, allowed and
//! forbidden values, property values read from the catalog) is converted to a
//! [`Token`] exactly once. Equality and hashing operate on the canonical form.
//!
//! # Examples
//!
//! ```
//! use constrain::core::models::Token;
//!
//! let token = Token::new("  present ");
//! assert_eq!(token.as_str(), "present");
//! assert_eq!(token, Token::new("present"));
//! ```

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::RawValue;
use crate::core::error::ShapeError;

/// A canonicalized string value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Canonicalize a raw string into a token
    ///
    /// Canonicalization strips surrounding whitespace. Case is preserved, so
    /// the display form of a token is the identifier it was declared with.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The canonical string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical form of a raw value
///
/// Covers exactly the shapes the declaration surface accepts: a string, a
/// list of strings, or a one-level mapping from string to either of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical {
    /// A single token
    Token(Token),
    /// An ordered list of tokens
    List(Vec<Token>),
    /// A mapping whose keys and values are canonical
    Map(IndexMap<Token, Canonical>),
}

impl Canonical {
    /// Flatten into a token sequence, if this is not a mapping
    #[must_use]
    pub fn into_tokens(self) -> Option<Vec<Token>> {
        match self {
            Self::Token(token) => Some(vec![token]),
            Self::List(tokens) => Some(tokens),
            Self::Map(_) => None,
        }
    }
}

/// Recursively canonicalize a raw value
///
/// Total over strings, lists of strings, and one-level mappings of string to
/// string or list of strings. Any other shape reaching this point means the
/// caller skipped a shape check, and is reported as
/// [`ShapeError::Internal`].
pub fn canonicalize(value: &RawValue) -> Result<Canonical, ShapeError> {
    canonicalize_at(value, 0)
}

fn canonicalize_at(value: &RawValue, depth: usize) -> Result<Canonical, ShapeError> {
    match value {
        RawValue::Scalar(s) => Ok(Canonical::Token(Token::new(s))),
        RawValue::List(items) => items
            .iter()
            .map(|item| match item {
                RawValue::Scalar(s) => Ok(Token::new(s)),
                other => Err(internal(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Canonical::List),
        RawValue::Map(entries) if depth == 0 => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, inner) in entries {
                map.insert(Token::new(key), canonicalize_at(inner, depth + 1)?);
            }
            Ok(Canonical::Map(map))
        },
        other => Err(internal(other)),
    }
}

fn internal(value: &RawValue) -> ShapeError {
    ShapeError::Internal {
        message: format!("cannot canonicalize {value} of kind {}", value.kind()),
    }
}

//! Resource references
//!
//! A reference names one resource in the catalog as `Type[title]`.
//! Type names are canonicalized per `::` segment, so `file[foo]`,
//! `FILE[foo]` and `File[foo]` all name the same resource.
//!
//! A single reference string may also name several resources of one type
//! by listing quoted titles:
//!
//! ```
//! use constrain::core::models::ResourceRef;
//!
//! let refs = ResourceRef::parse_many("Package['nginx', \"curl\"]").unwrap();
//! assert_eq!(refs.len(), 2);
//! assert_eq!(refs[0].to_string(), "Package[nginx]");
//! assert_eq!(refs[1].to_string(), "Package[curl]");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_]*(?:::[A-Za-z][A-Za-z0-9_]*)*)\s*\[(.*)\]\s*$")
        .expect("reference pattern is valid")
});

static QUOTED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:'([^']*)'|"([^"]*)")"#).expect("quoted title pattern is valid")
});

/// Errors that can occur when parsing a resource reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// Reference string was empty
    #[error("empty resource reference")]
    Empty,

    /// Not of the form `Type[title]`
    #[error("'{0}' is not a resource reference of the form Type[title]")]
    Malformed(String),

    /// The title between the brackets was empty
    #[error("'{0}' has an empty title")]
    EmptyTitle(String),

    /// A quoted title list could not be parsed
    #[error("'{0}' has a malformed title list")]
    MalformedTitles(String),
}

/// A reference to one resource in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceRef {
    kind: String,
    title: String,
}

impl ResourceRef {
    /// Build a reference from a type name and title
    ///
    /// The type name is canonicalized; the title is kept verbatim.
    #[must_use]
    pub fn new(kind: &str, title: &str) -> Self {
        Self {
            kind: canonical_type(kind),
            title: title.to_string(),
        }
    }

    /// Parse a reference naming exactly one resource
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        let mut refs = Self::parse_many(s)?;
        if refs.len() == 1 {
            Ok(refs.remove(0))
        } else {
            Err(ReferenceError::Malformed(s.to_string()))
        }
    }

    /// Parse a reference that may list several titles
    ///
    /// # Format
    ///
    /// ```text
    /// Type[title]               one resource, title taken verbatim
    /// Type['t1', "t2", ...]     one resource per quoted title
    /// ```
    pub fn parse_many(s: &str) -> Result<Vec<Self>, ReferenceError> {
        if s.trim().is_empty() {
            return Err(ReferenceError::Empty);
        }

        let caps = REFERENCE.captures(s).ok_or_else(|| ReferenceError::Malformed(s.to_string()))?;
        let kind = caps.get(1).map_or("", |m| m.as_str());
        let inner = caps.get(2).map_or("", |m| m.as_str());

        let titles = split_titles(s, inner)?;
        Ok(titles.iter().map(|title| Self::new(kind, title)).collect())
    }

    /// The canonical type name, e.g. `File` or `Apache::Vhost`
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The resource title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Capitalize each `::` segment: `apache::vhost` becomes `Apache::Vhost`
fn canonical_type(kind: &str) -> String {
    kind.trim()
        .split("::")
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join("::")
}

fn split_titles(reference: &str, inner: &str) -> Result<Vec<String>, ReferenceError> {
    let trimmed = inner.trim();
    if trimmed.is_empty() {
        return Err(ReferenceError::EmptyTitle(reference.to_string()));
    }
    if !trimmed.starts_with(['\'', '"']) {
        return Ok(vec![trimmed.to_string()]);
    }

    let malformed = || ReferenceError::MalformedTitles(reference.to_string());
    let mut titles = Vec::new();
    let mut rest = trimmed;
    loop {
        let caps = QUOTED_TITLE.captures(rest).ok_or_else(malformed)?;
        let title = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        if title.is_empty() {
            return Err(ReferenceError::EmptyTitle(reference.to_string()));
        }
        titles.push(title.to_string());

        let consumed = caps.get(0).map_or(0, |m| m.end());
        rest = rest[consumed..].trim_start();
        if rest.is_empty() {
            break;
        }
        // trailing comma is tolerated
        rest = rest.strip_prefix(',').ok_or_else(malformed)?.trim_start();
        if rest.is_empty() {
            break;
        }
    }
    Ok(titles)
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.title)
    }
}

impl Serialize for ResourceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! In-memory catalog
//!
//! Implements the `Catalog` port over a fixed set of resources, built in code
//! or loaded from a file of `[[resource]]` tables:
//!
//! ```toml
//! [[resource]]
//! type = "File"
//! title = "/etc/motd"
//! properties = { ensure = "file", mode = "0644" }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::models::{ResourceRef, Token};
use crate::core::ports::{Catalog, Resource};

/// A resource with fixed property values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResource {
    reference: ResourceRef,
    properties: IndexMap<Token, Token>,
}

impl StaticResource {
    /// Create a resource with no properties set
    #[must_use]
    pub fn new(reference: ResourceRef) -> Self {
        Self {
            reference,
            properties: IndexMap::new(),
        }
    }

    /// Set a property value
    #[must_use]
    pub fn with_property(mut self, property: &str, value: &str) -> Self {
        self.properties.insert(Token::new(property), Token::new(value));
        self
    }

    /// The resource's reference
    #[must_use]
    pub const fn reference(&self) -> &ResourceRef {
        &self.reference
    }
}

impl Resource for StaticResource {
    fn identity(&self) -> String {
        self.reference.to_string()
    }

    fn get(&self, property: &Token) -> Option<Token> {
        self.properties.get(property).cloned()
    }
}

/// Catalog of static resources, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    resources: IndexMap<ResourceRef, StaticResource>,
}

impl StaticCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any with the same reference
    pub fn insert(&mut self, resource: StaticResource) {
        self.resources.insert(resource.reference.clone(), resource);
    }

    /// Builder form of [`insert`](Self::insert)
    #[must_use]
    pub fn with_resource(mut self, resource: StaticResource) -> Self {
        self.insert(resource);
        self
    }

    /// Number of resources
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Load a catalog file; `.json` files are JSON, anything else TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or declares the
    /// same resource twice.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
        let file: CatalogFile = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        } else {
            toml::from_str(&content).with_context(|| format!("parsing catalog {}", path.display()))?
        };
        let catalog = Self::from_entries(file.resources)?;
        log::debug!("loaded {} resource(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    fn from_entries(entries: Vec<ResourceEntry>) -> anyhow::Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            let reference = ResourceRef::new(&entry.kind, &entry.title);
            if catalog.resources.contains_key(&reference) {
                anyhow::bail!("duplicate declaration of {reference} in catalog");
            }
            let mut resource = StaticResource::new(reference);
            for (property, value) in entry.properties {
                resource.properties.insert(Token::new(&property), Token::new(&value.to_string()));
            }
            catalog.insert(resource);
        }
        Ok(catalog)
    }
}

impl Catalog for StaticCatalog {
    fn resolve(&self, reference: &ResourceRef) -> Option<&dyn Resource> {
        self.resources.get(reference).map(|resource| -> &dyn Resource { resource })
    }
}

/// A catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "resource")]
    resources: Vec<ResourceEntry>,
}

/// One `[[resource]]` table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceEntry {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    #[serde(default)]
    properties: IndexMap<String, PropertyValue>,
}

/// Scalar property value as written in a catalog file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertyValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

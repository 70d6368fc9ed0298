//! Shared test fixtures and helpers
//!
//! In-memory collaborators for driving the engine without files.

use std::sync::Mutex;

use constrain::adapters::catalog::{StaticCatalog, StaticResource};
use constrain::core::models::{ConstraintSpec, RawDeclaration, ResourceRef};
use constrain::core::ports::{DiagnosticSink, Level};

/// Diagnostic sink that records every message
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages at one level
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::Error)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

/// Parse a single declaration written as a TOML table body
pub fn declaration(body: &str) -> RawDeclaration {
    toml::from_str(body).expect("declaration should deserialize")
}

/// Parse and validate a declaration
pub fn spec(body: &str) -> ConstraintSpec {
    ConstraintSpec::parse(&declaration(body)).expect("declaration should validate")
}

/// A resource with the given properties
pub fn resource(kind: &str, title: &str, properties: &[(&str, &str)]) -> StaticResource {
    properties
        .iter()
        .fold(StaticResource::new(ResourceRef::new(kind, title)), |resource, (k, v)| {
            resource.with_property(k, v)
        })
}

/// Catalog holding `File[foo]` with the given `ensure` value, or unset
pub fn file_foo(ensure: Option<&str>) -> StaticCatalog {
    let properties: Vec<(&str, &str)> = ensure.map(|value| ("ensure", value)).into_iter().collect();
    StaticCatalog::new().with_resource(resource("File", "foo", &properties))
}

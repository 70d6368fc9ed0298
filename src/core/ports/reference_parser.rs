//! Reference parser port
//!
//! Turns declared target strings into catalog references. Hosts with their
//! own reference syntax can supply an implementation; [`StandardReferenceParser`]
//! understands `Type[title]` and `Type['t1', 't2']`.

use super::super::models::{ReferenceError, ResourceRef};

/// Parses raw target strings into resource references
pub trait ReferenceParser: Send + Sync {
    /// Parse one declared target; a single string may name several resources
    fn parse(&self, raw: &str) -> Result<Vec<ResourceRef>, ReferenceError>;
}

/// Parser for `Type[title]` references
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReferenceParser;

impl ReferenceParser for StandardReferenceParser {
    fn parse(&self, raw: &str) -> Result<Vec<ResourceRef>, ReferenceError> {
        ResourceRef::parse_many(raw)
    }
}

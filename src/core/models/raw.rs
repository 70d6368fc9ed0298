//! Raw declaration input
//!
//! The declaration surface is loosely typed: a target may be one reference or
//! a list, a property rule may be a string, a list, or a single-key mapping.
//! [`RawValue`] is the closed set of shapes that survive deserialization.
//! Nothing past the parse stage looks at a `RawValue`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// A loosely-typed value as written in a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A string
    Scalar(String),
    /// A list of values
    List(Vec<RawValue>),
    /// A mapping from string keys to values, in declared order
    Map(IndexMap<String, RawValue>),
    /// Anything else (numbers, booleans, null), described for diagnostics
    Unsupported(String),
}

impl RawValue {
    /// Short name of this value's shape, used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "string",
            Self::List(_) => "array",
            Self::Map(_) => "hash",
            Self::Unsupported(_) => "unsupported value",
        }
    }

    /// Whether this is an empty list or an empty mapping
    #[must_use]
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Scalar(_) | Self::Unsupported(_) => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "'{s}'"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} => {value}")?;
                }
                f.write_str("}")
            },
            Self::Unsupported(description) => f.write_str(description),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, an array, or a hash")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawValue::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawValue::Scalar(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported(format!("boolean {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported(format!("integer {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported(format!("integer {v}")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported(format!("float {v}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported("null".to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawValue::Unsupported("null".to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            // TOML datetimes arrive as a single-entry map under a private key.
            if key == TOML_DATETIME_KEY {
                let datetime: String = map.next_value()?;
                return Ok(RawValue::Unsupported(format!("datetime {datetime}")));
            }
            let value = map.next_value::<RawValue>()?;
            entries.insert(key, value);
        }
        Ok(RawValue::Map(entries))
    }
}

/// One constraint declaration as written by its author
///
/// ```toml
/// [[constraint]]
/// name = "web-root"
/// resource = "File[/srv/www]"
/// properties = { ensure = "directory" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDeclaration {
    /// Unique name of the constraint
    pub name: String,

    /// One resource reference or a list of them
    #[serde(default)]
    pub resource: Option<RawValue>,

    /// Per-property rules (`allowed` by default, or `allowed`/`forbidden` hashes)
    #[serde(default)]
    pub properties: Option<RawValue>,

    /// Per-property allowed values
    #[serde(default)]
    pub allow: Option<RawValue>,

    /// Per-property forbidden values
    #[serde(default)]
    pub forbid: Option<RawValue>,

    /// Skip targets missing from the catalog instead of failing
    #[serde(default)]
    pub weak: bool,
}

impl RawDeclaration {
    /// Start a declaration with the given name and nothing else
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

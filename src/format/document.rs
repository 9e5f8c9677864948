//! In-memory YAML document restricted to JSON-compatible types.
//!
//! `serde_yaml` parses into its own [`Value`], which can carry arbitrary
//! tags and non-string keys. [`Document`] narrows that to the restricted
//! schema the emitter understands: scalar keys are stringified, standard
//! YAML tags are unwrapped, and anything else is rejected as malformed.

use serde_yaml::{Number, Value};

use crate::error::Error;

/// Standard YAML tags whose content is kept after dropping the tag
const DEGRADABLE_TAGS: &[&str] = &[
    "binary",
    "timestamp",
    "set",
    "omap",
    "pairs",
    "str",
    "int",
    "float",
    "bool",
    "null",
    "seq",
    "map",
];

/// Prefix the parser expands the `!!` tag handle to
const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// A parsed YAML node
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Document>),
    /// Key/value pairs in source order until [`Document::sort_keys`] runs
    Mapping(Vec<(String, Document)>),
}

impl Document {
    /// Parse one YAML document from text
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let value: Value =
            serde_yaml::from_str(raw).map_err(|e| Error::malformed(e.to_string()))?;
        Document::try_from(value)
    }

    /// Sort mapping keys ascending at every nesting level
    ///
    /// Sequences keep their element order; mappings nested inside them are
    /// still sorted.
    pub fn sort_keys(&mut self) {
        match self {
            Document::Mapping(entries) => {
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                for (_, value) in entries.iter_mut() {
                    value.sort_keys();
                }
            }
            Document::Sequence(items) => {
                for item in items.iter_mut() {
                    item.sort_keys();
                }
            }
            _ => {}
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Document::Null),
            Value::Bool(b) => Ok(Document::Bool(b)),
            Value::Number(n) => Ok(Document::Number(n)),
            Value::String(s) => Ok(Document::String(s)),
            Value::Sequence(items) => items
                .into_iter()
                .map(Document::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Document::Sequence),
            Value::Mapping(mapping) => {
                let mut entries: Vec<(String, Document)> = Vec::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key = key_to_string(key)?;
                    if entries.iter().any(|(existing, _)| *existing == key) {
                        return Err(Error::malformed(format!(
                            "duplicate mapping key {key:?} after converting keys to strings"
                        )));
                    }
                    entries.push((key, Document::try_from(value)?));
                }
                Ok(Document::Mapping(entries))
            }
            Value::Tagged(tagged) => {
                let tag = tagged.tag.to_string();
                if is_degradable_tag(&tag) {
                    Document::try_from(tagged.value)
                } else {
                    Err(Error::malformed(format!("unknown tag {tag}")))
                }
            }
        }
    }
}

fn key_to_string(key: Value) -> Result<String, Error> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) if is_degradable_tag(&tagged.tag.to_string()) => {
            key_to_string(tagged.value)
        }
        Value::Tagged(tagged) => Err(Error::malformed(format!("unknown tag {}", tagged.tag))),
        Value::Sequence(_) | Value::Mapping(_) => Err(Error::malformed(
            "mapping keys must be scalars, found a collection",
        )),
    }
}

fn is_degradable_tag(tag: &str) -> bool {
    let name = tag.trim_start_matches('!');
    let name = name.strip_prefix(CORE_TAG_PREFIX).unwrap_or(name);
    DEGRADABLE_TAGS.contains(&name)
}

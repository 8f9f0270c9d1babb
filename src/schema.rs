//! The record map every compilation stage reads from.
//!
//! A [`Schema`] is an ordered mapping from record name to its raw
//! definition. Definitions stay as `serde_json::Value` trees: the
//! reference walk treats them structurally, and the normalizer and type
//! mapper pick out only the keys they understand.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CompileError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    records: IndexMap<String, Value>,
}

/// Swagger 2 keeps models under `definitions`, OpenAPI 3 under `components.schemas`.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    definitions: Option<IndexMap<String, Value>>,
    #[serde(default)]
    components: Option<Components>,
}

#[derive(Debug, Deserialize)]
struct Components {
    #[serde(default)]
    schemas: IndexMap<String, Value>,
}

static REF_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#/(?:definitions|components/schemas)/(.+)$").expect("static regex")
});

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Schema {
    pub fn new(records: IndexMap<String, Value>) -> Self {
        Self { records }
    }

    /// Loads the record map out of a Swagger/OpenAPI document.
    ///
    /// With `json_pointer`, the record map is read from that location;
    /// otherwise `/definitions` and then `/components/schemas` are tried.
    pub fn from_document_str(src: &str, json_pointer: Option<&str>) -> Result<Self, CompileError> {
        match json_pointer {
            None => {
                let document = crate::path_de::from_str_with_path::<Document>(src)?;
                if let Some(records) = document.definitions {
                    return Ok(Self::new(records));
                }
                match document.components {
                    Some(components) => Ok(Self::new(components.schemas)),
                    None => Err(CompileError::document(
                        "document has neither `definitions` nor `components.schemas`",
                    )),
                }
            }
            Some(pointer) => {
                let document = serde_json::from_str::<Value>(src)
                    .map_err(|error| CompileError::document(error.to_string()))?;
                let node = document.pointer(pointer).cloned().ok_or_else(|| {
                    CompileError::document(format!("JSON pointer {pointer} selects nothing"))
                })?;
                let records: IndexMap<String, Value> =
                    crate::path_de::from_value_with_path(node)?;
                Ok(Self::new(records))
            }
        }
    }

    /// Appends every record of `other`, keeping declaration order.
    pub fn merge(&mut self, other: Schema) -> Result<(), CompileError> {
        for (name, definition) in other.records {
            if self.records.contains_key(&name) {
                return Err(CompileError::DuplicateRecord { record: name });
            }
            self.records.insert(name, definition);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.records.get(name)
    }

    /// Like [`Schema::get`], failing with `UnresolvedReference`.
    pub fn resolve(&self, name: &str) -> Result<&Value, CompileError> {
        self.get(name).ok_or_else(|| CompileError::UnresolvedReference {
            target: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Record names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, Value)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `#/definitions/Pet` → `Pet`. Anything else is taken verbatim.
pub fn ref_target(reference: &str) -> &str {
    match REF_PREFIX.captures(reference).and_then(|c| c.get(1)) {
        Some(name) => name.as_str(),
        None => reference,
    }
}

/// The record named by a `{"$ref": ...}` node, if it is one.
pub fn as_reference(node: &Value) -> Option<&str> {
    node.get("$ref").and_then(Value::as_str).map(ref_target)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

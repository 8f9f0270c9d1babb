//! Record definition → `ir::RecordUnit`.
//!
//! Three shapes are understood, checked in this order:
//! - bare type: a `type` other than `object`, emitted as a one-value wrapper;
//! - field container: a `properties` mapping;
//! - composition: an `allOf` list of inline fragments and `$ref`s whose
//!   fields are flattened into one list.
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::CompileError;
use crate::ir::{RecordBody, RecordUnit, ResolvedField, Ty};
use crate::lower::lower_field;
use crate::schema::{Schema, as_reference};

/// Recognized shape of a record definition, borrowed from the schema.
#[derive(Debug, Clone, Copy)]
pub enum RecordShape<'a> {
    Bare(&'a Value),
    Fields(&'a Map<String, Value>),
    Composed(&'a [Value]),
}

impl<'a> RecordShape<'a> {
    pub fn classify(def: &'a Value) -> Option<Self> {
        if def.get("type").is_some_and(|t| t.as_str() != Some("object")) {
            return Some(Self::Bare(def));
        }
        if let Some(properties) = def.get("properties").and_then(Value::as_object) {
            return Some(Self::Fields(properties));
        }
        if let Some(members) = def.get("allOf").and_then(Value::as_array) {
            return Some(Self::Composed(members));
        }
        None
    }
}

pub fn normalize_record(schema: &Schema, name: &str) -> Result<RecordUnit, CompileError> {
    let def = schema.resolve(name)?;
    let shape = RecordShape::classify(def).ok_or_else(|| CompileError::UnhandledRecordShape {
        record: name.to_string(),
    })?;

    let body = match shape {
        RecordShape::Bare(def) => RecordBody::Wrapper(lower_field(def)?),
        RecordShape::Fields(properties) => {
            let mut fields = IndexMap::new();
            resolve_properties(properties, &mut fields)?;
            RecordBody::Fields(into_fields(fields))
        }
        RecordShape::Composed(members) => {
            RecordBody::Fields(into_fields(flatten(schema, name, members)?))
        }
    };
    tracing::debug!(record = name, "normalized record");

    Ok(RecordUnit {
        name: name.to_string(),
        body,
    })
}

/// Inlines every composition member in declaration order.
///
/// A later member redefining a key replaces its type but keeps the
/// position the key was first inserted at.
fn flatten(
    schema: &Schema,
    record: &str,
    members: &[Value],
) -> Result<IndexMap<String, Ty>, CompileError> {
    let mut fields = IndexMap::new();
    for member in members {
        if let Some(properties) = member.get("properties").and_then(Value::as_object) {
            resolve_properties(properties, &mut fields)?;
        } else if let Some(base) = as_reference(member) {
            let properties = schema
                .resolve(base)?
                .get("properties")
                .and_then(Value::as_object)
                .ok_or_else(|| CompileError::UnsupportedComposition {
                    record: record.to_string(),
                    base: base.to_string(),
                })?;
            resolve_properties(properties, &mut fields)?;
        } else {
            tracing::debug!(record, "skipping composition member without properties or $ref");
        }
    }
    Ok(fields)
}

fn resolve_properties(
    properties: &Map<String, Value>,
    fields: &mut IndexMap<String, Ty>,
) -> Result<(), CompileError> {
    for (key, def) in properties {
        fields.insert(key.clone(), lower_field(def)?);
    }
    Ok(())
}

// the source schema's `required` list is advisory; every field is marked required
fn into_fields(fields: IndexMap<String, Ty>) -> Vec<ResolvedField> {
    fields
        .into_iter()
        .map(|(key, ty)| ResolvedField { key, ty, required: true })
        .collect()
}

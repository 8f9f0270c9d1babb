//! Field definition → `ir::Ty`.
//!
//! Rules apply in priority order: `string`, `number`/`float`,
//! `number`/`integer` (with an optional width), `boolean`, `array`
//! (recursive over `items`), `object`, then `$ref`. A definition with a
//! `type` tag never falls back to `$ref`.
use serde_json::Value;

use crate::error::CompileError;
use crate::ir::{IntWidth, Ty};
use crate::schema::as_reference;

pub fn lower_field(def: &Value) -> Result<Ty, CompileError> {
    if let Some(kind) = def.get("type") {
        let format = def.get("format").and_then(Value::as_str);
        return match kind.as_str() {
            Some("string") => Ok(Ty::String),
            Some("number") => match format {
                Some("float") => Ok(Ty::Float),
                Some("double") => Ok(Ty::Double),
                Some(other) => Ok(Ty::Integer(IntWidth::from_format(Some(other)))),
                None => Err(CompileError::MissingNumberFormat {
                    definition: def.to_string(),
                }),
            },
            Some("integer") => Ok(Ty::Integer(IntWidth::from_format(format))),
            Some("boolean") => Ok(Ty::Bool),
            Some("array") => {
                let items = def.get("items").ok_or_else(|| CompileError::MissingArrayItems {
                    definition: def.to_string(),
                })?;
                Ok(Ty::Array(Box::new(lower_field(items)?)))
            }
            Some("object") => Ok(Ty::Object),
            _ => Err(CompileError::unknown_field_kind(def)),
        };
    }
    match as_reference(def) {
        Some(target) => Ok(Ty::Record(target.to_string())),
        None => Err(CompileError::unknown_field_kind(def)),
    }
}

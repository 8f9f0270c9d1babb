//! Record units → source text.
//!
//! The emitter renders one code unit per record, in exactly the order it
//! is given, between an opening and a closing namespace marker. Target
//! syntax lives behind [`Backend`]; the emitter itself only sequences,
//! after checking that no two records or members share an identifier.
pub mod cpp;
pub mod rust;

use std::io::Write;

use indexmap::IndexMap;

use crate::error::CompileError;
use crate::ir::{RecordBody, RecordUnit, Ty};

pub use cpp::CppBackend;
pub use rust::RustBackend;

/// Banner placed above the namespace marker by every backend.
pub const BANNER: &str = "//\n// autogenerated file.  do not edit directly\n//\n";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Target-language syntax for one generated file.
pub trait Backend {
    /// Target-language spelling of a type.
    fn type_name(&self, ty: &Ty) -> String;

    /// Identifier declared for a record.
    fn type_ident(&self, record: &str) -> String;

    /// Identifier declared for a field key.
    fn member_ident(&self, key: &str) -> String;

    /// Banner, namespace opener and any shared support code.
    fn prologue(&self, namespace: &str) -> String;

    /// Namespace closer.
    fn epilogue(&self, namespace: &str) -> String;

    /// Declaration, serializer and deserializer of one record.
    fn record(&self, unit: &RecordUnit) -> String;
}

/// Generated text of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeUnit {
    pub record: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub prologue: String,
    pub units: Vec<CodeUnit>,
    pub epilogue: String,
}

pub struct Codegen<'a> {
    backend: &'a dyn Backend,
    namespace: &'a str,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl<'a> Codegen<'a> {
    pub fn new(backend: &'a dyn Backend, namespace: &'a str) -> Self {
        Self { backend, namespace }
    }

    pub fn emit(&self, units: &[RecordUnit]) -> Result<Generated, CompileError> {
        self.check_identifiers(units)?;
        Ok(Generated {
            prologue: self.backend.prologue(self.namespace),
            units: units
                .iter()
                .map(|unit| CodeUnit {
                    record: unit.name.clone(),
                    text: self.backend.record(unit),
                })
                .collect(),
            epilogue: self.backend.epilogue(self.namespace),
        })
    }

    fn check_identifiers(&self, units: &[RecordUnit]) -> Result<(), CompileError> {
        let mut types = IndexMap::<String, &str>::new();
        for unit in units {
            let ident = self.backend.type_ident(&unit.name);
            if let Some(first) = types.insert(ident.clone(), &unit.name) {
                return Err(CompileError::TypeCollision {
                    name: ident,
                    first: first.to_string(),
                    second: unit.name.clone(),
                });
            }
            let RecordBody::Fields(fields) = &unit.body else {
                continue;
            };
            let mut members = IndexMap::<String, &str>::new();
            for field in fields {
                let ident = self.backend.member_ident(&field.key);
                if let Some(first) = members.insert(ident.clone(), &field.key) {
                    return Err(CompileError::MemberCollision {
                        record: unit.name.clone(),
                        member: ident,
                        first: first.to_string(),
                        second: field.key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Generated {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.prologue.as_bytes())?;
        for unit in &self.units {
            writer.write_all(unit.text.as_bytes())?;
        }
        writer.write_all(self.epilogue.as_bytes())?;
        writer.flush()
    }

    pub fn into_string(self) -> String {
        let mut out = self.prologue;
        for unit in self.units {
            out.push_str(&unit.text);
        }
        out.push_str(&self.epilogue);
        out
    }
}

/// String literal for a schema key, valid in both target languages.
pub(crate) fn quoted(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

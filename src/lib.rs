//! Swagger/OpenAPI model definitions → source code.
//!
//! Pipeline, each stage consuming the previous one's output:
//! schema → reference graph → emission order → one normalized
//! [`ir::RecordUnit`] per record → one code unit per record.
//!
//! ```
//! use modelgen::{CompileOptions, Schema};
//!
//! let schema = Schema::from_document_str(
//!     r#"{"definitions": {"Id": {"type": "string"}}}"#,
//!     None,
//! ).unwrap();
//! let generated = modelgen::compile(&schema, &CompileOptions::default()).unwrap();
//! assert_eq!(generated.units.len(), 1);
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod graph;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod normalize;
pub mod path_de;
pub mod schema;

use std::io::Write;

pub use codegen::{Backend, CodeUnit, Codegen, CppBackend, Generated, RustBackend};
pub use error::CompileError;
pub use schema::Schema;

/// Which language to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Rust,
    Cpp {
        /// Macro invoked at the end of every class.
        dump_macro: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub target: Target,
    /// Enclosing namespace; each target has its own default.
    pub namespace: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            target: Target::Rust,
            namespace: None,
        }
    }
}

impl Target {
    pub fn default_namespace(&self) -> &'static str {
        match self {
            Target::Rust => "models",
            Target::Cpp { .. } => "amber_models",
        }
    }

    pub fn backend(&self) -> Box<dyn Backend> {
        match self {
            Target::Rust => Box::new(RustBackend),
            Target::Cpp { dump_macro } => Box::new(CppBackend {
                dump_macro: dump_macro.clone(),
            }),
        }
    }
}

/// Normalizes every record in emission order.
///
/// Fails on the first bad record; nothing is returned for the others.
pub fn plan(schema: &Schema) -> Result<Vec<ir::RecordUnit>, CompileError> {
    graph::emission_order(schema)?
        .iter()
        .map(|name| normalize::normalize_record(schema, name))
        .collect()
}

pub fn compile(schema: &Schema, options: &CompileOptions) -> Result<Generated, CompileError> {
    let units = plan(schema)?;
    let backend = options.target.backend();
    let namespace = options
        .namespace
        .as_deref()
        .unwrap_or_else(|| options.target.default_namespace());
    Codegen::new(backend.as_ref(), namespace).emit(&units)
}

/// Compiles `schema` and writes the framed code units to `writer`.
///
/// Nothing is written unless every record compiles.
pub fn generate_to_writer<W: Write>(
    schema: &Schema,
    options: &CompileOptions,
    writer: &mut W,
) -> Result<(), CompileError> {
    let generated = compile(schema, options)?;
    generated.write_to(writer)?;
    Ok(())
}

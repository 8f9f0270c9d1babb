//! Reference discovery and emission order.
//!
//! The walk is purely structural: it descends into every mapping value
//! and sequence element of every record definition and follows each
//! `$ref` string it meets, wherever it sits. A referenced record is
//! walked before it is appended, so its own dependencies land first
//! (post-order DFS). Names are appended once, on first completion.
//!
//! Cycles are rejected. Re-entering a record that is still being walked
//! fails with [`CompileError::ReferenceCycle`]: a record that contains
//! itself by value has no finite layout in either target.
use indexmap::IndexSet;
use serde_json::Value;

use crate::error::CompileError;
use crate::schema::{Schema, ref_target};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceGraph {
    /// Every transitively referenced record, dependencies first.
    pub referenced: IndexSet<String>,
}

struct Walker<'a> {
    schema: &'a Schema,
    in_progress: IndexSet<String>,
    graph: ReferenceGraph,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl ReferenceGraph {
    pub fn build(schema: &Schema) -> Result<Self, CompileError> {
        let mut walker = Walker {
            schema,
            in_progress: IndexSet::new(),
            graph: ReferenceGraph::default(),
        };
        for (_, definition) in schema.iter() {
            walker.walk(definition)?;
        }
        Ok(walker.graph)
    }
}

impl<'a> Walker<'a> {
    fn walk(&mut self, node: &'a Value) -> Result<(), CompileError> {
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Object(_) | Value::Array(_) => self.walk(value)?,
                        Value::String(reference) if key == "$ref" => {
                            self.visit(ref_target(reference))?
                        }
                        _ => {}
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.walk(item)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn visit(&mut self, name: &str) -> Result<(), CompileError> {
        if self.graph.referenced.contains(name) {
            return Ok(());
        }
        if let Some(start) = self.in_progress.get_index_of(name) {
            let mut records: Vec<String> = self.in_progress.iter().skip(start).cloned().collect();
            records.push(name.to_string());
            return Err(CompileError::ReferenceCycle { records });
        }
        let definition = self.schema.resolve(name)?;
        self.in_progress.insert(name.to_string());
        self.walk(definition)?;
        self.in_progress.shift_remove(name);
        self.graph.referenced.insert(name.to_string());
        Ok(())
    }
}

/// Referenced records first, then every other record in declaration order.
///
/// Every schema record appears exactly once.
pub fn emission_order(schema: &Schema) -> Result<Vec<String>, CompileError> {
    let graph = ReferenceGraph::build(schema)?;
    let mut order = graph.referenced;
    for name in schema.names() {
        if !order.contains(name) {
            order.insert(name.to_string());
        }
    }
    tracing::debug!(records = order.len(), "planned emission order");
    Ok(order.into_iter().collect())
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

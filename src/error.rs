//! Error types for schema compilation.
use thiserror::Error;

/// Everything that can abort a compilation run.
///
/// Every variant is fatal: a run either emits every record or nothing.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A field definition has neither a recognized `type` tag nor a `$ref`.
    #[error("unknown field kind: {definition}")]
    UnknownFieldKind {
        /// The offending field definition, as JSON text.
        definition: String,
    },

    /// A record definition is not a bare type, a field container or a composition.
    #[error("unhandled record shape for `{record}`")]
    UnhandledRecordShape {
        /// Record name.
        record: String,
    },

    /// A `$ref` names a record the schema does not define.
    #[error("unresolved reference to `{target}`")]
    UnresolvedReference {
        /// Referenced record name.
        target: String,
    },

    /// A composed record inlines a base that has no `properties` of its own.
    #[error("record `{record}` composes `{base}`, which is not a field container")]
    UnsupportedComposition {
        /// The composed record.
        record: String,
        /// The referenced base record.
        base: String,
    },

    /// Records reference each other in a loop; neither target can lay them out.
    #[error("reference cycle: {}", .records.join(" -> "))]
    ReferenceCycle {
        /// The loop as walked, starting and ending at the same record.
        records: Vec<String>,
    },

    /// Two keys of one record map to the same member identifier.
    #[error("record `{record}`: keys `{first}` and `{second}` both become member `{member}`")]
    MemberCollision {
        /// Record name.
        record: String,
        /// Shared member identifier.
        member: String,
        /// Key that claimed the member first.
        first: String,
        /// Key that collided with it.
        second: String,
    },

    /// Two record names map to the same type identifier.
    #[error("records `{first}` and `{second}` both become type `{name}`")]
    TypeCollision {
        /// Shared type identifier.
        name: String,
        /// Record that claimed the identifier first.
        first: String,
        /// Record that collided with it.
        second: String,
    },

    /// `"type": "number"` without the `format` key.
    #[error("number field without a `format`: {definition}")]
    MissingNumberFormat {
        /// The offending field definition, as JSON text.
        definition: String,
    },

    /// `"type": "array"` without the `items` key.
    #[error("array field without `items`: {definition}")]
    MissingArrayItems {
        /// The offending field definition, as JSON text.
        definition: String,
    },

    /// Two loaded documents define the same record.
    #[error("record `{record}` is defined more than once")]
    DuplicateRecord {
        /// Record name.
        record: String,
    },

    /// The schema document could not be read as a record map.
    #[error("schema document error: {message}")]
    Document {
        /// Error message, including the JSON path where possible.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// Creates an `UnknownFieldKind` error from the offending definition.
    pub fn unknown_field_kind(definition: &serde_json::Value) -> Self {
        Self::UnknownFieldKind {
            definition: definition.to_string(),
        }
    }

    /// Creates a document error with the given message.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }
}

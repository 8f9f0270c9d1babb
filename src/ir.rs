// Strongly-typed IR for codegen. No serde_json::Value here.

/// Backend-neutral type of a field or of a bare-type record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    String,
    Float,                   // number/float
    Double,                  // number/double
    Integer(IntWidth),
    Bool,
    Array(Box<Ty>),          // nests arbitrarily
    Object,                  // opaque, no structure decoded
    Record(String),          // schema name of the referenced record, not yet cased
}

/// Width selected by a numeric `format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    Default,                 // no (or unrecognized) format
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl IntWidth {
    pub fn from_format(format: Option<&str>) -> Self {
        match format {
            Some("int16") => Self::I16,
            Some("uint16") => Self::U16,
            Some("int32") => Self::I32,
            Some("uint32") => Self::U32,
            Some("int64") => Self::I64,
            Some("uint64") => Self::U64,
            _ => Self::Default,
        }
    }
}

impl Ty {
    /// Number of `Array` wrappers around the innermost element type.
    pub fn array_depth(&self) -> usize {
        match self {
            Ty::Array(item) => 1 + item.array_depth(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub key: String,         // original schema key, used on the wire
    pub ty: Ty,
    pub required: bool,      // advisory only, always true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Bare-type record: a single `value` member.
    Wrapper(Ty),
    /// Field container or flattened composition.
    Fields(Vec<ResolvedField>),
}

/// Emit-ready form of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUnit {
    pub name: String,        // schema name, not yet cased
    pub body: RecordBody,
}

impl RecordUnit {
    pub fn field(&self, key: &str) -> Option<&ResolvedField> {
        match &self.body {
            RecordBody::Fields(fields) => fields.iter().find(|f| f.key == key),
            RecordBody::Wrapper(_) => None,
        }
    }
}

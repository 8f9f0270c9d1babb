//! Rust target: plain structs plus a `JsonModel` trait over `serde_json::Value`.
use super::{BANNER, Backend, quoted};
use crate::ir::{IntWidth, RecordBody, RecordUnit, ResolvedField, Ty};
use crate::naming;

#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

// Support code shared by every generated record. `is_empty` follows
// nlohmann-json: null, [] and {} are empty, scalars never are.
const SUPPORT: &str = r#"    use serde_json::{Map, Value};

    /// Conversion to and from `serde_json::Value`.
    pub trait JsonModel: Sized {
        fn to_json(&self) -> Value;
        fn from_json(j: &Value) -> Result<Self, serde_json::Error>;
    }

    macro_rules! json_scalar {
        ($($t:ty),*) => {$(
            impl JsonModel for $t {
                fn to_json(&self) -> Value {
                    Value::from(self.clone())
                }

                fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
                    <$t as serde::Deserialize>::deserialize(j)
                }
            }
        )*};
    }

    json_scalar!(String, bool, f32, f64, i16, u16, i32, u32, i64, u64);

    impl<T: JsonModel> JsonModel for Vec<T> {
        fn to_json(&self) -> Value {
            Value::Array(self.iter().map(JsonModel::to_json).collect())
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            match j {
                Value::Array(items) => items.iter().map(T::from_json).collect(),
                _ => Err(serde::de::Error::custom("expected an array")),
            }
        }
    }

    impl JsonModel for Value {
        fn to_json(&self) -> Value {
            self.clone()
        }

        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {
            Ok(j.clone())
        }
    }

    fn is_empty(j: &Value) -> bool {
        match j {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
"#;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

// `self` and friends cannot be raw identifiers.
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

// Type-namespace names the generated module uses itself.
const TAKEN_TYPES: &[&str] = &[
    "Map", "Value", "JsonModel", "Vec", "String", "Option", "Result", "Box", "Default", "Clone",
    "PartialEq", "Sized", "Ok", "Err", "Some", "None",
];

impl Backend for RustBackend {
    fn type_name(&self, ty: &Ty) -> String {
        match ty {
            Ty::String => "String".into(),
            Ty::Float => "f32".into(),
            Ty::Double => "f64".into(),
            Ty::Integer(width) => match width {
                IntWidth::Default | IntWidth::I32 => "i32",
                IntWidth::I16 => "i16",
                IntWidth::U16 => "u16",
                IntWidth::U32 => "u32",
                IntWidth::I64 => "i64",
                IntWidth::U64 => "u64",
            }
            .into(),
            Ty::Bool => "bool".into(),
            Ty::Array(item) => format!("Vec<{}>", self.type_name(item)),
            Ty::Object => "Value".into(),
            Ty::Record(name) => self.type_ident(name),
        }
    }

    fn type_ident(&self, record: &str) -> String {
        let name = naming::identifier(&naming::type_name(record));
        if RESERVED.contains(&name.as_str()) || TAKEN_TYPES.contains(&name.as_str()) {
            return format!("{name}_");
        }
        name
    }

    fn member_ident(&self, key: &str) -> String {
        let name = naming::identifier(&naming::member_name(key));
        if RESERVED.contains(&name.as_str()) {
            return format!("{name}_");
        }
        if KEYWORDS.contains(&name.as_str()) {
            return format!("r#{name}");
        }
        name
    }

    fn prologue(&self, namespace: &str) -> String {
        let mut out = String::from(BANNER);
        out.push('\n');
        out.push_str(
            "#[allow(non_camel_case_types, non_snake_case, unused_mut, unused_imports, dead_code)]\n",
        );
        out.push_str(&format!("pub mod {namespace} {{\n"));
        out.push_str(SUPPORT);
        out
    }

    fn epilogue(&self, _namespace: &str) -> String {
        "}\n".into()
    }

    fn record(&self, unit: &RecordUnit) -> String {
        let type_name = self.type_ident(&unit.name);
        match &unit.body {
            RecordBody::Wrapper(ty) => self.wrapper(&type_name, ty),
            RecordBody::Fields(fields) => self.fields(&type_name, fields),
        }
    }
}

impl RustBackend {
    fn wrapper(&self, type_name: &str, ty: &Ty) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str("    #[derive(Debug, Clone, Default, PartialEq)]\n");
        out.push_str(&format!("    pub struct {type_name} {{\n"));
        out.push_str(&format!("        pub value: {},\n", self.type_name(ty)));
        out.push_str("    }\n\n");

        out.push_str(&format!("    impl JsonModel for {type_name} {{\n"));
        out.push_str("        fn to_json(&self) -> Value {\n");
        out.push_str("            self.value.to_json()\n");
        out.push_str("        }\n\n");
        out.push_str("        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {\n");
        out.push_str("            Ok(Self { value: JsonModel::from_json(j)? })\n");
        out.push_str("        }\n");
        out.push_str("    }\n");
        out
    }

    fn fields(&self, type_name: &str, fields: &[ResolvedField]) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str("    #[derive(Debug, Clone, Default, PartialEq)]\n");
        out.push_str(&format!("    pub struct {type_name} {{\n"));
        for field in fields {
            out.push_str(&format!(
                "        pub {}: {},\n",
                self.member_ident(&field.key),
                self.type_name(&field.ty)
            ));
        }
        out.push_str("    }\n\n");

        out.push_str(&format!("    impl JsonModel for {type_name} {{\n"));
        out.push_str("        fn to_json(&self) -> Value {\n");
        out.push_str("            let mut j = Map::new();\n");
        for field in fields {
            out.push_str(&format!(
                "            j.insert({}.to_owned(), self.{}.to_json());\n",
                quoted(&field.key),
                self.member_ident(&field.key)
            ));
        }
        out.push_str("            Value::Object(j)\n");
        out.push_str("        }\n\n");

        out.push_str("        fn from_json(j: &Value) -> Result<Self, serde_json::Error> {\n");
        out.push_str("            let mut r = Self::default();\n");
        for field in fields {
            out.push_str(&format!(
                "            if let Some(v) = j.get({}).filter(|v| !is_empty(v)) {{\n",
                quoted(&field.key)
            ));
            out.push_str(&format!(
                "                r.{} = JsonModel::from_json(v)?;\n",
                self.member_ident(&field.key)
            ));
            out.push_str("            }\n");
        }
        out.push_str("            Ok(r)\n");
        out.push_str("        }\n");
        out.push_str("    }\n");
        out
    }
}

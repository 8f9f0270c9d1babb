//! C++ target: classes with nlohmann-json `to_json`/`from_json` friends.
use super::{BANNER, Backend, quoted};
use crate::ir::{IntWidth, RecordBody, RecordUnit, ResolvedField, Ty};
use crate::naming;

#[derive(Debug, Clone, Default)]
pub struct CppBackend {
    /// Macro invoked at the end of every class body, e.g. `AMBER_DUMP`.
    pub dump_macro: Option<String>,
}

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "class", "compl", "concept", "const", "consteval", "constexpr",
    "constinit", "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype",
    "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export",
    "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq",
    "private", "protected", "public", "register", "reinterpret_cast", "requires", "return",
    "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor",
    "xor_eq",
];

impl Backend for CppBackend {
    fn type_name(&self, ty: &Ty) -> String {
        match ty {
            Ty::String => "std::string".into(),
            Ty::Float => "float".into(),
            Ty::Double => "double".into(),
            Ty::Integer(width) => match width {
                IntWidth::Default => "int",
                IntWidth::I16 => "int16_t",
                IntWidth::U16 => "uint16_t",
                IntWidth::I32 => "int32_t",
                IntWidth::U32 => "uint32_t",
                IntWidth::I64 => "int64_t",
                IntWidth::U64 => "uint64_t",
            }
            .into(),
            Ty::Bool => "bool".into(),
            Ty::Array(item) => format!("std::vector<{}>", self.type_name(item)),
            Ty::Object => "json".into(),
            Ty::Record(name) => self.type_ident(name),
        }
    }

    fn type_ident(&self, record: &str) -> String {
        naming::identifier(&naming::type_name(record))
    }

    fn member_ident(&self, key: &str) -> String {
        let name = naming::identifier(&naming::member_name(key));
        if KEYWORDS.contains(&name.as_str()) {
            return format!("{name}_");
        }
        name
    }

    fn prologue(&self, namespace: &str) -> String {
        format!("{BANNER}\nnamespace {namespace} {{\n\n")
    }

    fn epilogue(&self, _namespace: &str) -> String {
        "} // end namespace\n".into()
    }

    fn record(&self, unit: &RecordUnit) -> String {
        let class = self.type_ident(&unit.name);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("class {class} {{\n"));
        out.push_str("public:\n");
        match &unit.body {
            RecordBody::Wrapper(ty) => self.wrapper(&mut out, &class, ty),
            RecordBody::Fields(fields) => self.fields(&mut out, &class, fields),
        }
        if let Some(dump) = &self.dump_macro {
            out.push('\n');
            out.push_str(&format!("    {dump}()\n"));
        }
        out.push_str("};\n");
        out
    }
}

impl CppBackend {
    pub fn with_dump_macro(name: impl Into<String>) -> Self {
        Self {
            dump_macro: Some(name.into()),
        }
    }

    fn wrapper(&self, out: &mut String, class: &str, ty: &Ty) {
        let ty = self.type_name(ty);
        out.push_str(&format!("    {ty} value;\n"));

        out.push('\n');
        out.push_str(&format!("    friend void to_json(json &j, const {class} &r) {{\n"));
        out.push_str("        j = r.value;\n");
        out.push_str("    };\n");

        out.push('\n');
        out.push_str(&format!("    friend void from_json(const json &j, {class} &r) {{\n"));
        out.push_str(&format!("        r.value = j.get<{ty}>();\n"));
        out.push_str("    };\n");
    }

    fn fields(&self, out: &mut String, class: &str, fields: &[ResolvedField]) {
        for field in fields {
            out.push_str(&format!(
                "    {} {};\n",
                self.type_name(&field.ty),
                self.member_ident(&field.key)
            ));
        }

        out.push('\n');
        out.push_str(&format!("    friend void to_json(json &j, const {class} &r) {{\n"));
        for field in fields {
            out.push_str(&format!(
                "        j[{}] = r.{};\n",
                quoted(&field.key),
                self.member_ident(&field.key)
            ));
        }
        out.push_str("    };\n");

        out.push('\n');
        out.push_str(&format!("    friend void from_json(const json &j, {class} &r) {{\n"));
        for field in fields {
            let key = quoted(&field.key);
            out.push_str(&format!(
                "        if (j.contains({key}) and !j.at({key}).empty()) {{r.{} = j.at({key}).get<{}>();}}\n",
                self.member_ident(&field.key),
                self.type_name(&field.ty)
            ));
        }
        out.push_str("    };\n");
    }
}

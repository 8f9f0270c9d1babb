//! Identifier naming for generated code.
//!
//! Both rules are pure: hyphens become underscores and only the first
//! character changes case. Applying a rule to its own output is a no-op.
//! [`identifier`] then squeezes a name into the identifier alphabet both
//! targets share; reserved words are left to each backend.

/// Record name → generated type name (`sensor-config` → `Sensor_config`).
pub fn type_name(record: &str) -> String {
    recase_first(record, true)
}

/// Field name → generated member name (`OAuth-server` → `oAuth_server`).
pub fn member_name(field: &str) -> String {
    recase_first(field, false)
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_` and
/// prefixes `_` when the result is empty or starts with a digit.
pub fn identifier(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{out}");
    }
    out
}

fn recase_first(name: &str, upper: bool) -> String {
    let name = name.replace('-', "_");
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return name;
    };
    let mut out = String::with_capacity(name.len());
    if upper {
        out.extend(first.to_uppercase());
    } else {
        out.extend(first.to_lowercase());
    }
    out.push_str(chars.as_str());
    out
}

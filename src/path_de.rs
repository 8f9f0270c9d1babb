use serde::de::DeserializeOwned;

use crate::error::CompileError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, CompileError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        CompileError::document(format!("at JSON path {path} → {}", err.into_inner()))
    })
}

/// Same as [`from_str_with_path`], for a document that is already parsed.
pub fn from_value_with_path<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, CompileError> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        CompileError::document(format!("at JSON path {path} → {}", err.into_inner()))
    })
}

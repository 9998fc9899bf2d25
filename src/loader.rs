//! Reads the input document and the structural schema from disk

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ValidateError;

/// Check that the input, and the schema override if one was given, exist
/// before reading either. A missing input is reported ahead of a missing
/// schema.
pub fn ensure_inputs_exist(
    document_path: &Path,
    schema_path: Option<&Path>,
) -> Result<(), ValidateError> {
    if !document_path.exists() {
        return Err(ValidateError::InputNotFound(document_path.to_path_buf()));
    }
    match schema_path {
        Some(path) if !path.exists() => Err(ValidateError::SchemaNotFound(path.to_path_buf())),
        _ => Ok(()),
    }
}

/// Load a YAML semantic model document as a JSON value
pub fn load_document(path: &Path) -> Result<Value, ValidateError> {
    if !path.exists() {
        return Err(ValidateError::InputNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ValidateError::io(path, e))?;
    debug!("Parsing document {path:?} ({} bytes)", content.len());

    parse_document(path, content)
}

/// Parse YAML text; `path` is only used for error reporting
pub fn parse_document(path: &Path, content: String) -> Result<Value, ValidateError> {
    match serde_yaml::from_str::<Value>(&content) {
        Ok(value) => Ok(value),
        Err(e) => Err(ValidateError::malformed_input(path, content, &e)),
    }
}

/// Load the JSON structural schema
pub fn load_schema(path: &Path) -> Result<Value, ValidateError> {
    if !path.exists() {
        return Err(ValidateError::SchemaNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ValidateError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ValidateError::invalid_schema(path, e))
}

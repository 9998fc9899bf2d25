use serde_json::Value;
use std::path::Path;
use tracing::debug;

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::schemas::{BUNDLED_SCHEMA_NAME, bundled_schema};
use crate::error::ValidateError;

// Semantic model schemas are written against JSON Schema draft 2020-12
use jsonschema::draft202012 as schema_draft;

/// Structural conformance of the raw document against a JSON Schema
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile `schema`. `source` names the schema in error messages.
    pub fn new(schema: &Value, source: &Path) -> Result<Self, ValidateError> {
        let validator = schema_draft::options()
            .build(schema)
            .map_err(|e| ValidateError::invalid_schema(source, e))?;

        Ok(Self { validator })
    }

    pub fn from_file(path: &Path) -> Result<Self, ValidateError> {
        let schema = crate::loader::load_schema(path)?;
        Self::new(&schema, path)
    }

    /// The schema embedded in the binary
    pub fn bundled() -> Result<Self, ValidateError> {
        let source = Path::new(BUNDLED_SCHEMA_NAME);
        let schema = bundled_schema().map_err(|e| ValidateError::invalid_schema(source, e))?;
        Self::new(&schema, source)
    }

    /// Every schema violation becomes one diagnostic, in the order the
    /// schema validator reports them.
    pub fn validate(&self, document: &Value) -> Vec<Diagnostic> {
        debug!("Running schema validation");

        self.validator
            .iter_errors(document)
            .map(|error| {
                let path = display_path(&error.instance_path.to_string());
                Diagnostic::error(DiagnosticKind::Schema, path, error.to_string())
            })
            .collect()
    }
}

/// Turn a JSON pointer like `/semantic_model/0/name` into
/// `semantic_model -> 0 -> name`. The empty pointer is the document root.
fn display_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return "(root)".to_string();
    }

    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> SchemaValidator {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["semantic_model"],
            "properties": {
                "semantic_model": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["name"],
                        "properties": {
                            "name": {"type": "string"}
                        }
                    }
                }
            }
        });
        SchemaValidator::new(&schema, Path::new("test-schema.json")).unwrap()
    }

    #[test]
    fn test_conforming_document_has_no_diagnostics() {
        let doc = json!({"semantic_model": [{"name": "retail"}]});
        assert!(validator().validate(&doc).is_empty());
    }

    #[test]
    fn test_root_error_uses_root_path() {
        let diags = validator().validate(&json!({}));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Schema);
        assert_eq!(diags[0].context, "(root)");
        assert!(diags[0].message.contains("semantic_model"));
    }

    #[test]
    fn test_nested_error_path() {
        let doc = json!({"semantic_model": [{"name": "ok"}, {"name": 7}]});
        let diags = validator().validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].context, "semantic_model -> 1 -> name");
        assert!(diags[0].to_string().starts_with("[Schema] semantic_model -> 1 -> name: "));
    }

    #[test]
    fn test_non_object_document_is_a_diagnostic() {
        let diags = validator().validate(&json!(null));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].context, "(root)");
    }

    #[test]
    fn test_uncompilable_schema_is_fatal() {
        let schema = json!({"type": "not-a-type"});
        let result = SchemaValidator::new(&schema, Path::new("bad.json"));
        assert!(matches!(result, Err(ValidateError::InvalidSchema { .. })));
    }

    #[test]
    fn test_bundled_schema_compiles() {
        let validator = SchemaValidator::bundled().unwrap();
        assert!(validator.validate(&json!({"semantic_model": []})).is_empty());

        let diags = validator.validate(&json!({"semantic_model": [{"datasets": [{}]}]}));
        assert!(!diags.is_empty());
        assert!(diags.iter().all(|d| d.kind == DiagnosticKind::Schema));
    }

    #[test]
    fn test_display_path_unescapes_segments() {
        assert_eq!(display_path(""), "(root)");
        assert_eq!(display_path("/a~1b/c~0d/0"), "a/b -> c~d -> 0");
    }
}

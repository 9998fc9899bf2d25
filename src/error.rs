use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that stop a run before any validation pass executes
#[derive(Error, Debug, Diagnostic)]
pub enum ValidateError {
    #[error("File not found: {}", .0.display())]
    #[diagnostic(code(osi::input_not_found))]
    InputNotFound(PathBuf),

    #[error("Schema not found: {}", .0.display())]
    #[diagnostic(
        code(osi::schema_not_found),
        help("check --schema / OSI_SCHEMA, or omit both to use the bundled schema")
    )]
    SchemaNotFound(PathBuf),

    #[error("Failed to read {}", path.display())]
    #[diagnostic(code(osi::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {message}")]
    #[diagnostic(code(osi::malformed_input))]
    MalformedInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("Invalid schema {}: {message}", path.display())]
    #[diagnostic(code(osi::invalid_schema))]
    InvalidSchema { path: PathBuf, message: String },
}

impl ValidateError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed_input(path: &Path, content: String, error: &serde_yaml::Error) -> Self {
        Self::MalformedInput {
            src: crate::error_utils::create_named_source(path, content),
            span: crate::error_utils::yaml_error_span(error),
            message: error.to_string(),
        }
    }

    pub fn invalid_schema(path: &Path, message: impl ToString) -> Self {
        Self::InvalidSchema {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

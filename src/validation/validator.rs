use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use super::diagnostic::Diagnostic;
use super::expression::ExpressionValidator;
use super::reference::ReferenceValidator;
use super::report::ValidationReport;
use super::schema::SchemaValidator;
use super::unique::UniquenessValidator;
use crate::error::ValidateError;
use crate::models::Document;

/// Runs every validation pass over one document.
///
/// Passes never depend on each other and all of them always run; their
/// diagnostics are concatenated in a fixed order.
pub struct Validator {
    schema_validator: SchemaValidator,
    uniqueness_validator: UniquenessValidator,
    reference_validator: ReferenceValidator,
    expression_validator: ExpressionValidator,
}

impl Validator {
    pub fn new(
        schema_validator: SchemaValidator,
        expression_validator: ExpressionValidator,
    ) -> Self {
        Self {
            schema_validator,
            uniqueness_validator: UniquenessValidator::new(),
            reference_validator: ReferenceValidator::new(),
            expression_validator,
        }
    }

    /// Schema read from `schema_path`, with the SQL parser this build ships with
    pub fn from_schema_file(schema_path: &Path) -> Result<Self, ValidateError> {
        Ok(Self::new(
            SchemaValidator::from_file(schema_path)?,
            ExpressionValidator::detect(),
        ))
    }

    /// Schema embedded in the binary, with the SQL parser this build ships with
    pub fn bundled() -> Result<Self, ValidateError> {
        Ok(Self::new(
            SchemaValidator::bundled()?,
            ExpressionValidator::detect(),
        ))
    }

    /// All diagnostics: schema, uniqueness, references, then expressions
    pub fn diagnostics(&self, document: &Value) -> Vec<Diagnostic> {
        let view = Document::from_value(document);
        debug!("Validating {} model(s)", view.models().len());

        let mut diagnostics = self.schema_validator.validate(document);
        diagnostics.extend(self.uniqueness_validator.validate(&view));
        diagnostics.extend(self.reference_validator.validate(&view));
        diagnostics.extend(self.expression_validator.validate(&view));

        info!("✓ Validation passes complete: {} diagnostic(s)", diagnostics.len());
        diagnostics
    }

    pub fn validate(&self, document: &Value) -> ValidationReport {
        ValidationReport::new(self.diagnostics(document))
    }
}

mod diagnostic;
mod expression;
mod parser;
mod reference;
mod report;
mod schema;
mod schemas;
mod unique;
mod validator;


pub use diagnostic::{Diagnostic, DiagnosticKind, Severity, WARNING_MARKER};
pub use expression::ExpressionValidator;
#[cfg(feature = "sql")]
pub use parser::SqlParser;
pub use parser::{ExpressionParser, default_parser};
pub use reference::ReferenceValidator;
pub use report::{FileReport, ValidationReport};
pub use schema::SchemaValidator;
pub use schemas::{BUNDLED_SCHEMA_NAME, bundled_schema};
pub use unique::{UniquenessValidator, find_duplicates};

// Re-export the main Validator
pub use validator::Validator;

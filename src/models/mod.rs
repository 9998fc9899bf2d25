pub mod dialect;
pub mod document;
mod lenient;

// Re-export commonly used types
pub use dialect::{Dialect, Grammar};
pub use document::{
    Dataset, DialectExpression, Document, Expression, Field, Metric, Model, Relationship, UNNAMED,
};

pub mod error;
pub mod error_utils;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::ValidateError;
pub use validation::{ValidationReport, Validator};

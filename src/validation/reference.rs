use std::collections::HashSet;
use tracing::debug;

use super::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::Document;

pub struct ReferenceValidator;

impl ReferenceValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceValidator {
    /// Check that relationship endpoints name datasets of the same model
    pub fn validate(&self, document: &Document) -> Vec<Diagnostic> {
        debug!("Running reference validation");
        let mut diagnostics = Vec::new();

        for model in document.models() {
            let available_datasets: HashSet<&str> = model.dataset_names().collect();

            for relationship in &model.relationships {
                for (endpoint, dataset) in relationship.endpoints() {
                    if !available_datasets.contains(dataset) {
                        diagnostics.push(Diagnostic::error(
                            DiagnosticKind::Reference,
                            format!("Relationship '{}'", relationship.display_name()),
                            format!("'{endpoint}' references unknown dataset '{dataset}'"),
                        ));
                    }
                }
            }
        }

        diagnostics
    }
}

use std::collections::HashSet;
use tracing::debug;

use super::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::Document;

pub struct UniquenessValidator;

impl UniquenessValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UniquenessValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniquenessValidator {
    /// Flag duplicate dataset, field, metric and relationship names
    pub fn validate(&self, document: &Document) -> Vec<Diagnostic> {
        debug!("Running uniqueness validation");
        let mut diagnostics = Vec::new();

        for model in document.models() {
            let model_context = format!("Model '{}'", model.display_name());

            report(
                &mut diagnostics,
                &model_context,
                "dataset",
                find_duplicates(model.dataset_names()),
            );

            for dataset in &model.datasets {
                report(
                    &mut diagnostics,
                    &format!("Dataset '{}'", dataset.display_name()),
                    "field",
                    find_duplicates(dataset.field_names()),
                );
            }

            report(
                &mut diagnostics,
                &model_context,
                "metric",
                find_duplicates(model.metric_names()),
            );

            report(
                &mut diagnostics,
                &model_context,
                "relationship",
                find_duplicates(model.relationship_names()),
            );
        }

        diagnostics
    }
}

/// Every re-occurrence of a name, in order. A name seen N times is
/// returned N-1 times.
pub fn find_duplicates<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| !seen.insert(*name)).collect()
}

fn report(diagnostics: &mut Vec<Diagnostic>, context: &str, scope: &str, duplicates: Vec<&str>) {
    diagnostics.extend(duplicates.into_iter().map(|name| {
        Diagnostic::error(
            DiagnosticKind::Unique,
            context,
            format!("Duplicate {scope} name '{name}'"),
        )
    }));
}

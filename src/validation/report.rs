use serde::Serialize;
use std::fmt::Write;

use super::diagnostic::Diagnostic;

/// Merged outcome of all validation passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
}

/// JSON shape of a report for one input file
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: &'a str,
    pub passed: bool,
    #[serde(flatten)]
    pub report: &'a ValidationReport,
}

impl ValidationReport {
    /// Split diagnostics into warnings and actual errors, keeping the
    /// relative order of each.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let (warnings, errors) = diagnostics.into_iter().partition(Diagnostic::is_warning);
        Self { warnings, errors }
    }

    /// Warnings never fail a run
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Warnings, then the error listing when there is one. The status line
    /// is rendered separately by [`ValidationReport::status_line`].
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for warning in &self.warnings {
            let _ = writeln!(out, "  {warning}");
        }

        if !self.errors.is_empty() {
            let _ = writeln!(
                out,
                "\nValidation FAILED with {} error(s):\n",
                self.errors.len()
            );
            for error in &self.errors {
                let _ = writeln!(out, "  {error}");
            }
            out.push('\n');
        }

        out
    }

    pub fn status_line(&self, file_name: &str) -> String {
        if self.passed() {
            format!("Validation PASSED: {file_name}")
        } else {
            format!("Validation FAILED: {file_name}")
        }
    }

    pub fn to_json(&self, file_name: &str) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&FileReport {
            file: file_name,
            passed: self.passed(),
            report: self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::diagnostic::DiagnosticKind;

    fn unique(name: &str) -> Diagnostic {
        Diagnostic::error(
            DiagnosticKind::Unique,
            "Model 'retail'",
            format!("Duplicate dataset name '{name}'"),
        )
    }

    #[test]
    fn test_empty_report_passes() {
        let report = ValidationReport::new(Vec::new());
        assert!(report.passed());
        assert_eq!(report.render_text(), "");
        assert_eq!(report.status_line("model.yaml"), "Validation PASSED: model.yaml");
    }

    #[test]
    fn test_warnings_alone_pass() {
        let report = ValidationReport::new(vec![Diagnostic::warning(
            DiagnosticKind::Sql,
            "SQL parser not available",
        )]);

        assert!(report.passed());
        assert_eq!(
            report.render_text(),
            "  [SQL] Warning: SQL parser not available\n"
        );
        insta::assert_snapshot!(report.status_line("model.yaml"), @"Validation PASSED: model.yaml");
    }

    #[test]
    fn test_errors_fail_and_keep_order() {
        let report = ValidationReport::new(vec![
            unique("a"),
            Diagnostic::warning(DiagnosticKind::Sql, "SQL parser not available"),
            unique("b"),
        ]);

        assert!(!report.passed());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.errors, [unique("a"), unique("b")]);
        assert_eq!(
            report.render_text(),
            "  [SQL] Warning: SQL parser not available\n\
             \n\
             Validation FAILED with 2 error(s):\n\
             \n\
             \x20 [Unique] Model 'retail': Duplicate dataset name 'a'\n\
             \x20 [Unique] Model 'retail': Duplicate dataset name 'b'\n\
             \n"
        );
        assert_eq!(report.status_line("model.yaml"), "Validation FAILED: model.yaml");
    }

    #[test]
    fn test_error_mentioning_warning_marker_stays_error() {
        let error = Diagnostic::error(
            DiagnosticKind::Unique,
            "Model 'Warning: legacy'",
            "Duplicate dataset name 'Warning: old'",
        );
        assert!(error.to_string().contains(crate::validation::WARNING_MARKER));

        let report = ValidationReport::new(vec![error.clone()]);
        assert!(!report.passed());
        assert!(report.warnings.is_empty());
        assert_eq!(report.errors, [error]);
    }

    #[test]
    fn test_json_report() {
        let report = ValidationReport::new(vec![unique("a")]);
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json("model.yaml").unwrap()).unwrap();

        assert_eq!(json["file"], "model.yaml");
        assert_eq!(json["passed"], false);
        assert_eq!(json["warnings"], serde_json::json!([]));
        assert_eq!(json["errors"][0]["kind"], "unique");
        assert_eq!(json["errors"][0]["severity"], "error");
        assert_eq!(json["errors"][0]["context"], "Model 'retail'");
    }
}

use tracing::{debug, warn};

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::parser::{ExpressionParser, default_parser};
use crate::models::{DialectExpression, Document, Expression};

const PARSER_UNAVAILABLE: &str = "SQL parser not available, skipping SQL validation. \
     Rebuild with the `sql` feature enabled";

/// Dialect-aware syntax check of field and metric expressions.
///
/// Without a parser the whole pass is replaced by one warning.
pub struct ExpressionValidator {
    parser: Option<Box<dyn ExpressionParser>>,
}

impl ExpressionValidator {
    /// Use whichever parser this build ships with
    pub fn detect() -> Self {
        Self {
            parser: default_parser(),
        }
    }

    pub fn with_parser(parser: impl ExpressionParser + 'static) -> Self {
        Self {
            parser: Some(Box::new(parser)),
        }
    }

    pub fn unavailable() -> Self {
        Self { parser: None }
    }

    pub fn is_available(&self) -> bool {
        self.parser.is_some()
    }

    pub fn validate(&self, document: &Document) -> Vec<Diagnostic> {
        let Some(parser) = self.parser.as_deref() else {
            warn!("No SQL parser compiled in; expression validation skipped");
            return vec![Diagnostic::warning(DiagnosticKind::Sql, PARSER_UNAVAILABLE)];
        };

        debug!("Running expression validation");
        let mut diagnostics = Vec::new();

        for model in document.models() {
            for dataset in &model.datasets {
                for field in &dataset.fields {
                    let owner = format!(
                        "Field '{}.{}'",
                        dataset.display_name(),
                        field.display_name()
                    );
                    check_expression(parser, &owner, field.expression.as_ref(), &mut diagnostics);
                }
            }

            for metric in &model.metrics {
                let owner = format!("Metric '{}'", metric.display_name());
                check_expression(parser, &owner, metric.expression.as_ref(), &mut diagnostics);
            }
        }

        diagnostics
    }
}

fn check_expression(
    parser: &dyn ExpressionParser,
    owner: &str,
    expression: Option<&Expression>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(expression) = expression else {
        return;
    };

    for entry in expression.entries_with_text() {
        if let Err(message) = check_entry(parser, entry) {
            diagnostics.push(Diagnostic::error(
                DiagnosticKind::Sql,
                format!("{owner} ({})", entry.dialect_tag()),
                message,
            ));
        }
    }
}

/// Parse the text as written, then as the projection of a `SELECT`. The
/// entry is valid if either parses; otherwise the error of the second
/// attempt is returned, cut to its first line.
fn check_entry(parser: &dyn ExpressionParser, entry: &DialectExpression) -> Result<(), String> {
    let Some(grammar) = entry.grammar() else {
        return Ok(());
    };
    let text = entry.text();

    if parser.parse(grammar, text).is_ok() {
        return Ok(());
    }

    parser
        .parse(grammar, &format!("SELECT {text}"))
        .map_err(|e| e.lines().next().unwrap_or_default().to_string())
}

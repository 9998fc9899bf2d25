use serde::Serialize;
use std::fmt;

/// Marker carried by the rendered text of every warning
pub const WARNING_MARKER: &str = "Warning:";

/// Which pass produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Schema,
    Unique,
    Reference,
    Sql,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Schema => write!(f, "Schema"),
            DiagnosticKind::Unique => write!(f, "Unique"),
            DiagnosticKind::Reference => write!(f, "Reference"),
            DiagnosticKind::Sql => write!(f, "SQL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding, rendered as `[<Kind>] <context>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        kind: DiagnosticKind,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            context: context.into(),
            message: message.into(),
        }
    }

    /// Warnings use the marker as their context so the rendered line reads
    /// `[<Kind>] Warning: <message>`.
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            context: WARNING_MARKER.trim_end_matches(':').to_string(),
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.context, self.message)
    }
}

//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Source for miette reports, named by the file's path
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Zero-width span at a YAML parse error, if the parser reported one
pub fn yaml_error_span(error: &serde_yaml::Error) -> Option<SourceSpan> {
    error
        .location()
        .map(|location| SourceSpan::new(location.index().into(), 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_named_by_plain_path() {
        let source = create_named_source(Path::new("models/retail.yaml"), "a: [".to_string());
        assert_eq!(source.name(), "models/retail.yaml");
    }

    #[test]
    fn test_yaml_error_span_points_at_error() {
        let content = "semantic_model: [\n  - name: a\n";
        let error = serde_yaml::from_str::<serde_json::Value>(content).unwrap_err();
        let span = yaml_error_span(&error).unwrap();
        assert_eq!(span.len(), 0);
        assert!(span.offset() <= content.len());
    }
}

use serde::Deserialize;
use serde_json::Value;

use super::dialect::{Dialect, Grammar};
use super::lenient;

/// Label used in diagnostics for entities without a name
pub const UNNAMED: &str = "<unnamed>";

/// Read-only view of a semantic model document.
///
/// Built from the raw document value. Missing or mistyped keys never make
/// construction fail; they show up as absent names and empty collections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub semantic_model: Vec<Model>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Model {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub datasets: Vec<Dataset>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub metrics: Vec<Metric>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::mapping")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metric {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::mapping")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Relationship {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub from: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Expression {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub dialects: Vec<DialectExpression>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DialectExpression {
    #[serde(default, deserialize_with = "lenient::string")]
    pub dialect: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub expression: Option<String>,
}

impl Document {
    /// Build the view from a parsed document. A root that is not a mapping
    /// yields an empty document.
    pub fn from_value(value: &Value) -> Self {
        lenient::from_mapping(value).unwrap_or_default()
    }

    pub fn models(&self) -> &[Model] {
        &self.semantic_model
    }
}

/// Present, non-empty name, the only kind that takes part in uniqueness
/// and reference checks.
fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|name| !name.is_empty())
}

impl Model {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().filter_map(|d| non_empty(&d.name))
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().filter_map(|m| non_empty(&m.name))
    }

    pub fn relationship_names(&self) -> impl Iterator<Item = &str> {
        self.relationships.iter().filter_map(|r| non_empty(&r.name))
    }
}

impl Dataset {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| non_empty(&f.name))
    }
}

impl Field {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

impl Metric {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

impl Relationship {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Endpoints that name a dataset, labelled by the key they came from.
    pub fn endpoints(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("from", &self.from), ("to", &self.to)]
            .into_iter()
            .filter_map(|(key, name)| non_empty(name).map(|name| (key, name)))
    }
}

impl Expression {
    /// Entries that carry expression text; empty text is never checked.
    pub fn entries_with_text(&self) -> impl Iterator<Item = &DialectExpression> {
        self.dialects.iter().filter(|entry| !entry.text().is_empty())
    }
}

impl DialectExpression {
    pub fn dialect_tag(&self) -> &str {
        self.dialect.as_deref().unwrap_or(Dialect::DEFAULT_TAG)
    }

    pub fn text(&self) -> &str {
        self.expression.as_deref().unwrap_or_default()
    }

    pub fn grammar(&self) -> Option<Grammar> {
        Dialect::grammar_for_tag(self.dialect_tag())
    }
}

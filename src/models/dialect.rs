use std::fmt;
use std::str::FromStr;

/// Expression dialects a semantic model can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    AnsiSql,
    Snowflake,
    Databricks,
    Mdx,
    Tableau,
}

/// SQL grammars the expression parser knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Dialect-neutral SQL, used for ANSI text and unknown dialect tags
    Generic,
    Snowflake,
    Databricks,
}

/// Tag, dialect and grammar for every supported dialect. `None` means the
/// dialect is not SQL and its expressions are never syntax-checked.
const DIALECTS: &[(&str, Dialect, Option<Grammar>)] = &[
    ("ANSI_SQL", Dialect::AnsiSql, Some(Grammar::Generic)),
    ("SNOWFLAKE", Dialect::Snowflake, Some(Grammar::Snowflake)),
    ("DATABRICKS", Dialect::Databricks, Some(Grammar::Databricks)),
    ("MDX", Dialect::Mdx, None),
    ("TABLEAU", Dialect::Tableau, None),
];

impl Dialect {
    pub const DEFAULT_TAG: &'static str = "ANSI_SQL";

    fn entry(self) -> &'static (&'static str, Dialect, Option<Grammar>) {
        DIALECTS
            .iter()
            .find(|(_, dialect, _)| *dialect == self)
            .unwrap_or(&DIALECTS[0])
    }

    pub fn tag(self) -> &'static str {
        self.entry().0
    }

    pub fn grammar(self) -> Option<Grammar> {
        self.entry().2
    }

    /// Grammar for a raw dialect tag as written in a document.
    ///
    /// Tags outside the known set fall back to the generic grammar; the
    /// schema pass is what reports them.
    pub fn grammar_for_tag(tag: &str) -> Option<Grammar> {
        tag.parse::<Dialect>()
            .map(Dialect::grammar)
            .unwrap_or(Some(Grammar::Generic))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}'")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIALECTS
            .iter()
            .find(|(tag, _, _)| *tag == s)
            .map(|(_, dialect, _)| *dialect)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

//! SQL grammar capability used by the expression pass

use crate::models::Grammar;

/// Syntax check of a piece of SQL text under one grammar.
///
/// `Err` carries the grammar's error text, which may span several lines.
pub trait ExpressionParser {
    fn parse(&self, grammar: Grammar, sql: &str) -> Result<(), String>;
}

/// The parser compiled into this build, if any
#[cfg(feature = "sql")]
pub fn default_parser() -> Option<Box<dyn ExpressionParser>> {
    Some(Box::new(SqlParser))
}

#[cfg(not(feature = "sql"))]
pub fn default_parser() -> Option<Box<dyn ExpressionParser>> {
    None
}

/// `sqlparser`-backed grammar
#[cfg(feature = "sql")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlParser;

#[cfg(feature = "sql")]
impl ExpressionParser for SqlParser {
    fn parse(&self, grammar: Grammar, sql: &str) -> Result<(), String> {
        use sqlparser::dialect::{DatabricksDialect, GenericDialect, SnowflakeDialect};
        use sqlparser::parser::Parser;

        let result = match grammar {
            Grammar::Generic => Parser::parse_sql(&GenericDialect {}, sql),
            Grammar::Snowflake => Parser::parse_sql(&SnowflakeDialect {}, sql),
            Grammar::Databricks => Parser::parse_sql(&DatabricksDialect {}, sql),
        };

        match result {
            Ok(statements) if statements.is_empty() => {
                Err(format!("No expression was parsed from '{sql}'"))
            }
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

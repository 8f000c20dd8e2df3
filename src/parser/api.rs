use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/expression.pest"] // relative to src
pub struct ExpressionParser;

pub const SEPARATOR: char = '.';

/// Splits a dot-notation reference into its components.
///
/// The split is purely mechanical: order is preserved, nothing is trimmed and
/// empty components (`"a..b"`, `".a"`, `""`) are kept as empty strings.
pub fn parse(source: &str) -> Vec<String> {
    source.split(SEPARATOR).map(|c| c.to_string()).collect()
}

/// A dot-notation reference such as `Math.cos`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    components: Vec<String>,
}

impl Expression {
    pub fn parse(source: &str) -> Self {
        Expression {
            source: source.to_string(),
            components: parse(source),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Whether the source is a plain `identifier(.identifier)*` chain.
    ///
    /// Expressions that are not still resolve (and normally fail); this is
    /// only used to report them.
    pub fn is_identifier_chain(&self) -> bool {
        ExpressionParser::parse(Rule::identifier_chain, &self.source).is_ok()
    }
}

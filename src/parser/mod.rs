mod api;
#[cfg(test)]
mod unit_tests;

pub use api::{parse, Expression, ExpressionParser, Rule, SEPARATOR};

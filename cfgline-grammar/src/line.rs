//! Production-line syntax: `<LHS> -> <ALT> ( | <ALT> )*`.

use std::sync::OnceLock;

use regex::Regex;

use crate::production::Production;
use crate::symbol::Symbol;

/// One uppercase LHS, the arrow, then an optional `|`-separated list of
/// runs over `[A-Za-z0-9ε]`.
const PRODUCTION_PATTERN: &str = r"^[A-Z]\s*->\s*([A-Za-z0-9ε]+(\s*\|\s*[A-Za-z0-9ε]+)*)?$";

fn production_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PRODUCTION_PATTERN).expect("production pattern is valid"))
}

/// A validated line split into its left-hand symbol and alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionLine {
    pub lhs: Symbol,
    pub alternatives: Vec<Production>,
}

/// Whether `line` matches the production-line syntax. Callers trim first.
pub fn validate(line: &str) -> bool {
    production_regex().is_match(line)
}

/// Splits a valid line on the arrow and on `|`. Returns `None` for lines
/// that fail [`validate`].
///
/// An absent right-hand side yields a single empty production.
pub fn decompose(line: &str) -> Option<ProductionLine> {
    if !validate(line) {
        return None;
    }

    let (lhs, rhs) = line.split_once("->")?;
    let lhs = lhs.trim().chars().next().map(Symbol::from)?;
    let alternatives = rhs
        .split('|')
        .map(|piece| Production::parse(piece.trim()))
        .collect();

    Some(ProductionLine { lhs, alternatives })
}

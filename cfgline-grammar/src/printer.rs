//! Renders grammars back to the `LHS -> ALT | ALT` line format.

use crate::grammar::Grammar;
use crate::production::Production;
use crate::symbol::Symbol;

/// Renders one rule. An entry without alternatives renders as `"S -> "`.
pub fn render_rule(lhs: Symbol, alternatives: &[Production]) -> String {
    let rhs = alternatives
        .iter()
        .map(Production::to_string)
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{} -> {}", lhs, rhs)
}

/// One line per entry, in grammar order.
pub fn render_lines(grammar: &Grammar) -> Vec<String> {
    grammar
        .rules()
        .map(|(lhs, alternatives)| render_rule(lhs, alternatives))
        .collect()
}

/// Lines joined with `\n`, without a trailing newline.
pub fn render(grammar: &Grammar) -> String {
    render_lines(grammar).join("\n")
}

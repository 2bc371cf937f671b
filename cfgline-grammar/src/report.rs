use std::fmt;

use serde::Serialize;

use crate::production::Production;
use crate::symbol::Symbol;

/// A unit production deleted from `lhs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedUnit {
    pub lhs: Symbol,
    pub production: Production,
}

/// Number of duplicate alternatives collapsed for `lhs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedAlternatives {
    pub lhs: Symbol,
    pub merged: usize,
}

/// What each simplification pass changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimplificationReport {
    pub start: Symbol,
    pub empty_nonterminals: Vec<Symbol>,
    pub unreachable_nonterminals: Vec<Symbol>,
    pub unit_productions: Vec<RemovedUnit>,
    pub merged_alternatives: Vec<MergedAlternatives>,
}

impl SimplificationReport {
    pub fn new(start: Symbol) -> Self {
        Self {
            start,
            empty_nonterminals: Vec::new(),
            unreachable_nonterminals: Vec::new(),
            unit_productions: Vec::new(),
            merged_alternatives: Vec::new(),
        }
    }

    pub fn merged_total(&self) -> usize {
        self.merged_alternatives.iter().map(|entry| entry.merged).sum()
    }

    /// Whether simplification left the grammar untouched.
    pub fn is_noop(&self) -> bool {
        self.empty_nonterminals.is_empty()
            && self.unreachable_nonterminals.is_empty()
            && self.unit_productions.is_empty()
            && self.merged_alternatives.is_empty()
    }
}

fn join_symbols(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        return "-".to_string();
    }
    symbols
        .iter()
        .map(Symbol::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for SimplificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start symbol: {}", self.start)?;
        writeln!(f, "empty nonterminals removed: {}", join_symbols(&self.empty_nonterminals))?;
        writeln!(
            f,
            "unreachable nonterminals removed: {}",
            join_symbols(&self.unreachable_nonterminals)
        )?;
        if self.unit_productions.is_empty() {
            writeln!(f, "unit productions removed: -")?;
        } else {
            let units = self
                .unit_productions
                .iter()
                .map(|unit| format!("{} -> {}", unit.lhs, unit.production))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "unit productions removed: {}", units)?;
        }
        write!(f, "duplicate alternatives merged: {}", self.merged_total())
    }
}

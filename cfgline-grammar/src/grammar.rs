use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::printer;
use crate::production::Production;
use crate::symbol::Symbol;

/// Production rules keyed by nonterminal, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grammar {
    rules: IndexMap<Symbol, Vec<Production>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives of `lhs`, replacing any earlier entry. A replaced
    /// entry keeps its original position.
    pub fn insert(&mut self, lhs: Symbol, alternatives: Vec<Production>) -> Option<Vec<Production>> {
        self.rules.insert(lhs, alternatives)
    }

    pub fn alternatives(&self, lhs: Symbol) -> Option<&[Production]> {
        self.rules.get(&lhs).map(Vec::as_slice)
    }

    pub fn contains(&self, lhs: Symbol) -> bool {
        self.rules.contains_key(&lhs)
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rules.keys().copied()
    }

    pub fn rules(&self) -> impl Iterator<Item = (Symbol, &[Production])> + '_ {
        self.rules
            .iter()
            .map(|(lhs, alternatives)| (*lhs, alternatives.as_slice()))
    }

    /// Number of nonterminal entries.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of alternatives across all entries.
    pub fn production_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

impl FromIterator<(Symbol, Vec<Production>)> for Grammar {
    fn from_iter<T: IntoIterator<Item = (Symbol, Vec<Production>)>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alts(items: &[&str]) -> Vec<Production> {
        items.iter().map(|item| Production::parse(item)).collect()
    }

    #[test]
    fn insert_overwrites_and_keeps_position() {
        let mut grammar = Grammar::new();
        grammar.insert(Symbol::new('S'), alts(&["a"]));
        grammar.insert(Symbol::new('A'), alts(&["b"]));
        let previous = grammar.insert(Symbol::new('S'), alts(&["c", "d"]));

        assert_eq!(previous, Some(alts(&["a"])));
        assert_eq!(
            grammar.nonterminals().collect::<Vec<_>>(),
            vec![Symbol::new('S'), Symbol::new('A')]
        );
        assert_eq!(grammar.alternatives(Symbol::new('S')), Some(alts(&["c", "d"]).as_slice()));
        assert_eq!(grammar.production_count(), 3);
    }

    #[test]
    fn serializes_as_ordered_map_of_strings() {
        let grammar: Grammar = vec![
            (Symbol::new('S'), alts(&["aA", "ε"])),
            (Symbol::new('A'), alts(&["a"])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&grammar).expect("serialize grammar");
        assert_eq!(json, r#"{"S":["aA","ε"],"A":["a"]}"#);
    }
}

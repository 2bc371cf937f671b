//! The simplification passes. Every pass is a pure function from one
//! grammar to a new one; [`Simplifier`] runs them once each, in order:
//! empty entries, unreachable entries, unit productions, duplicates.

use std::collections::HashSet;

use cfgline_core::CoreConfig;
use tracing::{debug, info};

use crate::grammar::Grammar;
use crate::production::Production;
use crate::report::{MergedAlternatives, RemovedUnit, SimplificationReport};
use crate::symbol::Symbol;

/// Runs the simplification passes relative to a start symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplifier {
    start: Symbol,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new(Symbol::new(cfgline_core::config::DEFAULT_START_SYMBOL))
    }
}

impl Simplifier {
    pub fn new(start: Symbol) -> Self {
        Self { start }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(Symbol::new(config.start_symbol))
    }

    pub fn start(&self) -> Symbol {
        self.start
    }

    pub fn simplify(&self, grammar: &Grammar) -> Grammar {
        self.simplify_with_report(grammar).0
    }

    pub fn simplify_with_report(&self, grammar: &Grammar) -> (Grammar, SimplificationReport) {
        let mut report = SimplificationReport::new(self.start);

        let (grammar, removed) = empty_pass(grammar);
        debug!(removed = removed.len(), "removed nonterminals without alternatives");
        report.empty_nonterminals = removed;

        let (grammar, removed) = reachability_pass(&grammar, self.start);
        debug!(start = %self.start, removed = removed.len(), "pruned unreachable nonterminals");
        report.unreachable_nonterminals = removed;

        let (grammar, removed) = unit_pass(&grammar);
        debug!(removed = removed.len(), "deleted unit productions");
        report.unit_productions = removed;

        let (grammar, merged) = merge_pass(&grammar);
        debug!(merged = merged.len(), "merged duplicate alternatives");
        report.merged_alternatives = merged;

        info!(
            nonterminals = grammar.len(),
            productions = grammar.production_count(),
            "grammar simplified"
        );
        (grammar, report)
    }
}

/// Drops entries whose alternative list is empty. An entry holding only an
/// ε alternative is kept.
pub fn remove_empty_nonterminals(grammar: &Grammar) -> Grammar {
    empty_pass(grammar).0
}

/// Keeps only the entries reachable from `start`.
pub fn prune_unreachable(grammar: &Grammar, start: Symbol) -> Grammar {
    reachability_pass(grammar, start).0
}

/// Deletes every production consisting of a single nonterminal that is
/// itself an entry of the grammar. The target's alternatives are not substituted.
pub fn remove_unit_productions(grammar: &Grammar) -> Grammar {
    unit_pass(grammar).0
}

/// Keeps the first occurrence of each distinct alternative per entry.
pub fn merge_duplicate_alternatives(grammar: &Grammar) -> Grammar {
    merge_pass(grammar).0
}

/// Symbols visited by a depth-first walk from `start`. `start` is always
/// included, even when it has no entry. Every character of a production is
/// checked independently; only nonterminals with an entry are followed.
pub fn reachable_from(grammar: &Grammar, start: Symbol) -> HashSet<Symbol> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(symbol) = stack.pop() {
        if !visited.insert(symbol) {
            continue;
        }
        for production in grammar.alternatives(symbol).unwrap_or_default() {
            stack.extend(
                production
                    .symbols()
                    .iter()
                    .copied()
                    .filter(|next| {
                        next.is_nonterminal() && !visited.contains(next) && grammar.contains(*next)
                    }),
            );
        }
    }

    visited
}

fn empty_pass(grammar: &Grammar) -> (Grammar, Vec<Symbol>) {
    let mut removed = Vec::new();
    let kept: Grammar = grammar
        .rules()
        .filter_map(|(lhs, alternatives)| {
            if alternatives.is_empty() {
                removed.push(lhs);
                None
            } else {
                Some((lhs, alternatives.to_vec()))
            }
        })
        .collect();
    (kept, removed)
}

fn reachability_pass(grammar: &Grammar, start: Symbol) -> (Grammar, Vec<Symbol>) {
    let reachable = reachable_from(grammar, start);
    let mut removed = Vec::new();
    let kept: Grammar = grammar
        .rules()
        .filter_map(|(lhs, alternatives)| {
            if reachable.contains(&lhs) {
                Some((lhs, alternatives.to_vec()))
            } else {
                removed.push(lhs);
                None
            }
        })
        .collect();
    (kept, removed)
}

fn unit_pass(grammar: &Grammar) -> (Grammar, Vec<RemovedUnit>) {
    // Collect first, then rebuild without the collected positions.
    let mut doomed: HashSet<(Symbol, usize)> = HashSet::new();
    for (lhs, alternatives) in grammar.rules() {
        for (index, production) in alternatives.iter().enumerate() {
            if production
                .unit_target()
                .is_some_and(|target| target.is_nonterminal() && grammar.contains(target))
            {
                doomed.insert((lhs, index));
            }
        }
    }

    let mut removed = Vec::new();
    let kept: Grammar = grammar
        .rules()
        .map(|(lhs, alternatives)| {
            let mut survivors = Vec::with_capacity(alternatives.len());
            for (index, production) in alternatives.iter().enumerate() {
                if doomed.contains(&(lhs, index)) {
                    removed.push(RemovedUnit {
                        lhs,
                        production: production.clone(),
                    });
                } else {
                    survivors.push(production.clone());
                }
            }
            (lhs, survivors)
        })
        .collect();
    (kept, removed)
}

fn merge_pass(grammar: &Grammar) -> (Grammar, Vec<MergedAlternatives>) {
    let mut merged = Vec::new();
    let kept: Grammar = grammar
        .rules()
        .map(|(lhs, alternatives)| {
            let mut seen: HashSet<&Production> = HashSet::new();
            let unique: Vec<Production> = alternatives
                .iter()
                .filter(|production| seen.insert(*production))
                .cloned()
                .collect();
            let dropped = alternatives.len() - unique.len();
            if dropped > 0 {
                merged.push(MergedAlternatives { lhs, merged: dropped });
            }
            (lhs, unique)
        })
        .collect();
    (kept, merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    fn sym(value: char) -> Symbol {
        Symbol::new(value)
    }

    fn alts(items: &[&str]) -> Vec<Production> {
        items.iter().map(|item| Production::parse(item)).collect()
    }

    #[test]
    fn empty_pass_only_drops_entries_without_alternatives() {
        let grammar: Grammar = vec![
            (sym('S'), alts(&["aA"])),
            (sym('A'), alts(&["ε"])),
            (sym('B'), Vec::new()),
        ]
        .into_iter()
        .collect();

        let result = remove_empty_nonterminals(&grammar);
        assert!(result.contains(sym('A')));
        assert!(!result.contains(sym('B')));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_pass_does_not_rewrite_nullable_references() {
        let grammar: Grammar = vec![(sym('S'), alts(&["aB"])), (sym('B'), Vec::new())]
            .into_iter()
            .collect();

        let result = remove_empty_nonterminals(&grammar);
        assert_eq!(result.alternatives(sym('S')), Some(alts(&["aB"]).as_slice()));
    }

    #[test]
    fn reachability_follows_references_transitively() {
        let grammar = load(["S -> aA", "A -> bB", "B -> c", "C -> D", "D -> d"]).expect("valid");

        let result = prune_unreachable(&grammar, sym('S'));
        assert_eq!(
            result.nonterminals().collect::<Vec<_>>(),
            vec![sym('S'), sym('A'), sym('B')]
        );
    }

    #[test]
    fn reachability_handles_cycles() {
        let grammar = load(["S -> aA", "A -> Sb | ε", "Z -> z"]).expect("valid");

        let reachable = reachable_from(&grammar, sym('S'));
        assert_eq!(reachable, HashSet::from([sym('S'), sym('A')]));
    }

    #[test]
    fn missing_start_symbol_empties_grammar() {
        let grammar = load(["A -> a", "B -> Ab"]).expect("valid");

        assert_eq!(reachable_from(&grammar, sym('S')), HashSet::from([sym('S')]));
        assert!(prune_unreachable(&grammar, sym('S')).is_empty());
    }

    #[test]
    fn references_to_undefined_nonterminals_are_ignored() {
        let grammar = load(["S -> aX"]).expect("valid");
        let reachable = reachable_from(&grammar, sym('S'));
        assert_eq!(reachable, HashSet::from([sym('S')]));
    }

    #[test]
    fn terminal_keys_are_neither_followed_nor_treated_as_units() {
        let grammar: Grammar = vec![
            (sym('S'), alts(&["a", "xA"])),
            (sym('A'), alts(&["b"])),
            (sym('a'), alts(&["c"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(reachable_from(&grammar, sym('S')), HashSet::from([sym('S'), sym('A')]));
        assert_eq!(
            remove_unit_productions(&grammar).alternatives(sym('S')),
            Some(alts(&["a", "xA"]).as_slice())
        );
    }

    #[test]
    fn custom_start_symbol_is_respected() {
        let grammar = load(["S -> a", "E -> T1", "T -> t"]).expect("valid");

        let result = Simplifier::new(sym('E')).simplify(&grammar);
        assert_eq!(
            result.nonterminals().collect::<Vec<_>>(),
            vec![sym('E'), sym('T')]
        );
    }

    #[test]
    fn unit_pass_deletes_without_substituting() {
        let grammar = load(["S -> A | aB | B", "A -> a", "B -> b"]).expect("valid");

        let result = remove_unit_productions(&grammar);
        assert_eq!(result.alternatives(sym('S')), Some(alts(&["aB"]).as_slice()));
        assert_eq!(result.alternatives(sym('A')), Some(alts(&["a"]).as_slice()));
    }

    #[test]
    fn unit_pass_keeps_terminals_and_undefined_nonterminals() {
        let grammar = load(["S -> a | ε | 1 | X | S"]).expect("valid");

        let result = remove_unit_productions(&grammar);
        assert_eq!(
            result.alternatives(sym('S')),
            Some(alts(&["a", "ε", "1", "X"]).as_slice())
        );
    }

    #[test]
    fn unit_pass_removes_every_duplicate_unit() {
        let grammar = load(["S -> A | A | a", "A -> a"]).expect("valid");

        let (_, removed) = unit_pass(&grammar);
        assert_eq!(removed.len(), 2);
        assert_eq!(
            remove_unit_productions(&grammar).alternatives(sym('S')),
            Some(alts(&["a"]).as_slice())
        );
    }

    #[test]
    fn merge_keeps_first_occurrences() {
        let grammar = load(["S -> b | a | b | a | c"]).expect("valid");

        let (result, merged) = merge_pass(&grammar);
        assert_eq!(result.alternatives(sym('S')), Some(alts(&["b", "a", "c"]).as_slice()));
        assert_eq!(merged, vec![MergedAlternatives { lhs: sym('S'), merged: 2 }]);
    }

    #[test]
    fn merge_distinguishes_empty_from_epsilon() {
        let grammar: Grammar = vec![(sym('S'), alts(&["", "ε", ""]))].into_iter().collect();

        let result = merge_duplicate_alternatives(&grammar);
        assert_eq!(result.alternatives(sym('S')), Some(alts(&["", "ε"]).as_slice()));
    }

    #[test]
    fn simplify_does_not_mutate_input() {
        let grammar = load(["S -> A | a | a", "A -> a", "C -> c"]).expect("valid");
        let before = grammar.clone();

        let _ = Simplifier::default().simplify(&grammar);
        assert_eq!(grammar, before);
    }

    #[test]
    fn report_tracks_every_pass() {
        let mut grammar = load(["S -> A | a | a", "A -> a", "C -> c"]).expect("valid");
        grammar.insert(sym('E'), Vec::new());

        let (result, report) = Simplifier::default().simplify_with_report(&grammar);
        assert_eq!(report.empty_nonterminals, vec![sym('E')]);
        assert_eq!(report.unreachable_nonterminals, vec![sym('C')]);
        assert_eq!(
            report.unit_productions,
            vec![RemovedUnit { lhs: sym('S'), production: Production::parse("A") }]
        );
        assert_eq!(report.merged_total(), 1);
        assert!(!report.is_noop());
        assert_eq!(result.to_string(), "S -> a\nA -> a");
    }

    #[test]
    fn simplified_grammar_is_reported_as_noop_when_untouched() {
        let grammar = load(["S -> aA", "A -> b"]).expect("valid");
        let (result, report) = Simplifier::default().simplify_with_report(&grammar);
        assert!(report.is_noop());
        assert_eq!(result, grammar);
    }

    #[test]
    fn simplifier_reads_start_from_config() {
        let config = CoreConfig {
            start_symbol: 'P',
            ..CoreConfig::default()
        };
        assert_eq!(Simplifier::from_config(&config).start(), sym('P'));
    }
}

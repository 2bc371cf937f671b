//! Context-free grammar simplification for the CfgLine tools.
//!
//! Grammars are read one production per line (`S -> aA | B`), validated,
//! assembled into a [`Grammar`] and rewritten by the [`Simplifier`]: entries
//! without alternatives and entries unreachable from the start symbol are
//! dropped, unit productions are deleted and duplicate alternatives merged.

mod error;
mod grammar;
pub mod line;
mod loader;
pub mod printer;
mod production;
mod report;
pub mod simplifier;
mod source;
mod symbol;

pub use error::GrammarError;
pub use grammar::Grammar;
pub use line::ProductionLine;
pub use loader::{load, load_from, load_grammar, skip_blank_lines};
pub use printer::render;
pub use production::Production;
pub use report::{MergedAlternatives, RemovedUnit, SimplificationReport};
pub use simplifier::Simplifier;
pub use source::{split_lines, FileSource, LineSource, MemorySource, StdinSource};
pub use symbol::Symbol;

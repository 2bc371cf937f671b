//! CfgLine: context-free grammar simplifier.
//!
//! A grammar is read one production per line (`S -> aA | B`), validated and
//! rewritten into a simpler equivalent grammar.
//!
//! # Architecture
//!
//! * `cfgline-core`: canonical errors, configuration and logging setup
//! * `cfgline-grammar`: model, line validation, loading, simplification
//!   and printing
//! * `cfgline-cli`: the `cfgline` binary

pub use cfgline_core::{config, logging, CfgLineError, ConfigError, CoreConfig};
pub use cfgline_grammar::{
    line, load, load_from, load_grammar, printer, render, simplifier, skip_blank_lines,
    split_lines, FileSource, Grammar, GrammarError, LineSource, MemorySource, Production,
    ProductionLine, SimplificationReport, Simplifier, StdinSource, Symbol,
};

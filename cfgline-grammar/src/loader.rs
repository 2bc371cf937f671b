use std::path::Path;

use tracing::{debug, warn};

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::line;
use crate::source::{FileSource, LineSource};

/// Builds a grammar from raw lines, all or nothing.
///
/// Each line is trimmed and must be a valid production line; the first one
/// that is not aborts loading with [`GrammarError::InvalidLine`]. A later
/// line for the same nonterminal replaces the earlier entry.
pub fn load<I, S>(lines: I) -> Result<Grammar, GrammarError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grammar = Grammar::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let text = raw.as_ref().trim();
        let Some(parsed) = line::decompose(text) else {
            warn!(line_number = index + 1, line = %text, "invalid production line");
            return Err(GrammarError::InvalidLine(text.to_string()));
        };

        debug!(
            line_number = index + 1,
            lhs = %parsed.lhs,
            alternatives = parsed.alternatives.len(),
            "accepted production line"
        );
        if grammar.insert(parsed.lhs, parsed.alternatives).is_some() {
            debug!(lhs = %parsed.lhs, "replaced earlier entry");
        }
    }

    Ok(grammar)
}

/// Obtains every line from `source` before inspecting any of them.
pub fn load_from(source: &dyn LineSource) -> Result<Grammar, GrammarError> {
    let lines = source.read_lines()?;
    debug!(source = %source.describe(), lines = lines.len(), "read grammar source");
    load(lines)
}

/// Loads the grammar stored in a UTF-8 file.
pub fn load_grammar(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
    load_from(&FileSource::new(path.as_ref()))
}

/// Drops lines that are empty once trimmed, for callers that tolerate them.
pub fn skip_blank_lines<I, S>(lines: I) -> impl Iterator<Item = S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
}

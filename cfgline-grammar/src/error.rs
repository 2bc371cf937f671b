use std::io;

use thiserror::Error;

/// Errors returned while obtaining or loading a grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar source unavailable: {source_name}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid production line: {0}")]
    InvalidLine(String),
}

impl GrammarError {
    pub fn from_io(source_name: impl Into<String>, source: io::Error) -> Self {
        GrammarError::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// The offending line, verbatim, for [`GrammarError::InvalidLine`].
    pub fn invalid_line(&self) -> Option<&str> {
        match self {
            GrammarError::InvalidLine(line) => Some(line),
            GrammarError::SourceUnavailable { .. } => None,
        }
    }
}

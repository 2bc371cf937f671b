use std::io;
use std::process::ExitCode;

use cfgline_core::CfgLineError;
use cfgline_grammar::GrammarError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Core(#[from] CfgLineError),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
    #[error("could not serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// `1` invalid grammar line, `2` source unavailable, `3` anything else.
    pub fn code(&self) -> u8 {
        match self {
            CliError::Grammar(GrammarError::InvalidLine(_)) => 1,
            CliError::Grammar(GrammarError::SourceUnavailable { .. }) => 2,
            _ => 3,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

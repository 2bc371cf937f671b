use std::fmt;

use serde::{Serialize, Serializer};

use crate::symbol::Symbol;

/// One right-hand-side alternative: an ordered run of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Production(Vec<Symbol>);

impl Production {
    /// The empty production.
    pub fn empty() -> Self {
        Production(Vec::new())
    }

    /// Maps every character of `text` to a symbol. No validation happens here.
    pub fn parse(text: &str) -> Self {
        Production(text.chars().map(Symbol::from).collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// The single symbol of a length-1 production.
    pub fn unit_target(&self) -> Option<Symbol> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl From<Vec<Symbol>> for Production {
    fn from(symbols: Vec<Symbol>) -> Self {
        Production(symbols)
    }
}

impl From<&str> for Production {
    fn from(text: &str) -> Self {
        Production::parse(text)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl Serialize for Production {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

use std::fmt;

use serde::Serialize;

/// A single grammar symbol. Nonterminals are ASCII uppercase letters;
/// everything else (lowercase letters, digits, ε) is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(value: char) -> Self {
        Symbol(value)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_nonterminal(self) -> bool {
        self.0.is_ascii_uppercase()
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

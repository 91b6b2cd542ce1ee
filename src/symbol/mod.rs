//! Symbols of a context-free grammar. A symbol is either a terminal, which
//! classifies input tokens, or a nonterminal, which is expanded through rules.
//!
//! Custom symbols are distinguished by their identifiers. The reserved markers
//! `Empty`, `EndOfInput` and `Start` are distinct from every custom symbol.

use std::fmt;

use crate::error::{GrammarError, Result};

/// A non-blank pattern identifying a custom terminal.
///
/// The pattern is opaque to the analysis. It is only compared for equality.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Pattern(Box<str>);

impl Pattern {
    /// Creates a pattern, rejecting blank input.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(GrammarError::BlankTerminal);
        }
        Ok(Pattern(pattern.into_boxed_str()))
    }

    /// Returns the pattern as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A non-blank name identifying a custom nonterminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Name(Box<str>);

impl Name {
    /// Creates a name, rejecting blank input.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GrammarError::BlankNonTerminal);
        }
        Ok(Name(name.into_boxed_str()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A terminal symbol.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Terminal {
    /// A terminal matched against input tokens by its pattern.
    Custom(Pattern),
    /// The empty sequence, ε. A rule whose right-hand side is `[Empty]` lets
    /// its nonterminal vanish.
    Empty,
    /// The end of input, `$`. Only seeds the FOLLOW set of the start symbol
    /// and never appears in a rule.
    EndOfInput,
}

impl Terminal {
    /// Creates a custom terminal from a pattern.
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        Pattern::new(pattern).map(Terminal::Custom)
    }

    /// Checks whether this is the ε marker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Terminal::Empty)
    }

    /// Checks whether this terminal may be used as a lookahead, that is,
    /// whether it is anything but ε.
    #[inline]
    pub fn is_lookahead(&self) -> bool {
        !self.is_empty()
    }
}

/// A nonterminal symbol.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum NonTerminal {
    /// A named nonterminal.
    Custom(Name),
    /// The entry point of the grammar.
    Start,
}

impl NonTerminal {
    /// Creates a custom nonterminal from a name.
    pub fn custom(name: impl Into<String>) -> Result<Self> {
        Name::new(name).map(NonTerminal::Custom)
    }

    /// Checks whether this is the start symbol.
    #[inline]
    pub fn is_start(&self) -> bool {
        matches!(self, NonTerminal::Start)
    }
}

/// A grammar symbol.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// A terminal.
    Terminal(Terminal),
    /// A nonterminal.
    NonTerminal(NonTerminal),
}

impl Symbol {
    /// Checks whether the symbol is a terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Returns the terminal, if this symbol is one.
    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Symbol::Terminal(terminal) => Some(terminal),
            Symbol::NonTerminal(_) => None,
        }
    }

    /// Returns the nonterminal, if this symbol is one.
    pub fn as_nonterminal(&self) -> Option<&NonTerminal> {
        match self {
            Symbol::Terminal(_) => None,
            Symbol::NonTerminal(nonterminal) => Some(nonterminal),
        }
    }
}

impl From<Terminal> for Symbol {
    #[inline]
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    #[inline]
    fn from(nonterminal: NonTerminal) -> Self {
        Symbol::NonTerminal(nonterminal)
    }
}

impl<'a> From<&'a Terminal> for Symbol {
    #[inline]
    fn from(terminal: &'a Terminal) -> Self {
        Symbol::Terminal(terminal.clone())
    }
}

impl<'a> From<&'a NonTerminal> for Symbol {
    #[inline]
    fn from(nonterminal: &'a NonTerminal) -> Self {
        Symbol::NonTerminal(nonterminal.clone())
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Custom(pattern) => f.write_str(pattern.as_str()),
            Terminal::Empty => f.write_str("ε"),
            Terminal::EndOfInput => f.write_str("$"),
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonTerminal::Custom(name) => f.write_str(name.as_str()),
            NonTerminal::Start => f.write_str("<start>"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(terminal) => fmt::Display::fmt(terminal, f),
            Symbol::NonTerminal(nonterminal) => fmt::Display::fmt(nonterminal, f),
        }
    }
}

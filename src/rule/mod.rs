//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single nonterminal on its left-hand side and a non-empty
//! array of symbols on its right-hand side. Rules are validated when they are
//! created and never change afterwards.

pub mod builder;

use std::fmt;

use crate::error::{GrammarError, Result};
use crate::symbol::{NonTerminal, Symbol, Terminal};

/// A validated production rule `lhs -> rhs`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Rule {
    lhs: NonTerminal,
    rhs: Vec<Symbol>,
}

impl Rule {
    /// Creates a new rule.
    ///
    /// The right-hand side must not be empty, must not mention the end of
    /// input, must not start with `lhs`, and may contain ε only as its sole
    /// symbol. The empty production is written `lhs -> [Terminal::Empty]`.
    pub fn new<I, S>(lhs: NonTerminal, rhs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let rhs: Vec<Symbol> = rhs.into_iter().map(Into::into).collect();

        if rhs.is_empty() {
            return Err(GrammarError::EmptyRhs { lhs });
        }
        if rhs.contains(&Symbol::Terminal(Terminal::EndOfInput)) {
            return Err(GrammarError::EndOfInputInRhs { lhs });
        }
        if rhs[0].as_nonterminal() == Some(&lhs) {
            return Err(GrammarError::LeftRecursion { lhs });
        }
        if rhs.len() > 1 && rhs.contains(&Symbol::Terminal(Terminal::Empty)) {
            return Err(GrammarError::MixedEmpty { lhs });
        }

        Ok(Rule { lhs, rhs })
    }

    /// Returns the rule's left-hand side.
    #[inline]
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// Returns the rule's right-hand side.
    #[inline]
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Checks whether this is an ε-rule.
    pub fn is_empty_rule(&self) -> bool {
        self.rhs == [Symbol::Terminal(Terminal::Empty)]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for sym in &self.rhs {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

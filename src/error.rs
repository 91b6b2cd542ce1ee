//! Errors raised while defining a grammar or analyzing it.

use thiserror::Error;

use crate::symbol::NonTerminal;

/// Kind of failure. Every variant is a precondition violation detected
/// synchronously; none of them is recoverable by retrying.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GrammarError {
    #[error("blank terminal patterns are not allowed")]
    BlankTerminal,

    #[error("blank nonterminal names are not allowed")]
    BlankNonTerminal,

    #[error("the rule for {lhs} must not be empty, use ε to represent the empty sequence")]
    EmptyRhs { lhs: NonTerminal },

    #[error("the end of input marker cannot appear in the rule for {lhs}")]
    EndOfInputInRhs { lhs: NonTerminal },

    #[error("left recursion is not allowed in the rule for {lhs}")]
    LeftRecursion { lhs: NonTerminal },

    #[error("ε cannot appear with other symbols in the rule for {lhs}")]
    MixedEmpty { lhs: NonTerminal },

    #[error("the grammar must contain at least one rule for the start symbol")]
    MissingStartRule,
}

/// Result of grammar construction and analysis.
pub type Result<T, E = GrammarError> = std::result::Result<T, E>;

//! Static analysis of context-free grammars for LL(1) parsing.
//!
//! Rules are validated as they are built. From a [`Grammar`], the library
//! computes FIRST and FOLLOW sets of every nonterminal and the LL(1) parse
//! table mapping each (nonterminal, lookahead) pair to the rules that apply.
//! Entries holding more than one rule are reported as conflicts, not errors.
//!
//! ```
//! use cfg_ll1::{Grammar, LlParseTable, NonTerminal, Symbol, Terminal};
//!
//! # fn main() -> cfg_ll1::Result<()> {
//! let list = NonTerminal::custom("L")?;
//! let item = Terminal::custom("x")?;
//!
//! let mut grammar = Grammar::new();
//! grammar
//!     .rule(NonTerminal::Start)
//!     .rhs([Symbol::from(&item), Symbol::from(&list)])?
//!     .rule(list.clone())
//!     .rhs([Symbol::from(&item), Symbol::from(&list)])?
//!     .rhs([Terminal::Empty])?;
//!
//! let table = LlParseTable::new(&grammar)?;
//! assert!(table.is_ll1());
//! assert_eq!(table.get(&list, &Terminal::EndOfInput).map(|rules| rules.len()), Some(1));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod classification;
pub mod error;
pub mod fixed_point;
mod grammar;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::classification::{LlClassification, LlConflict, LlNonterminalClass, LlParseTable};
pub use crate::error::{GrammarError, Result};
pub use crate::fixed_point::fixed_point;
pub use crate::grammar::Grammar;
pub use crate::prediction::{
    first_set_for_string, FirstFollowTable, FirstSets, FollowSets, GrammarSetsExt, PerSymbolSets,
    PredictSets,
};
pub use crate::rule::builder::RuleBuilder;
pub use crate::rule::Rule;
pub use crate::symbol::{Name, NonTerminal, Pattern, Symbol, Terminal};

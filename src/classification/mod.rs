//! Classification of grammars.

pub mod ll;

pub use self::ll::{LlClassification, LlConflict, LlNonterminalClass, LlParseTable};

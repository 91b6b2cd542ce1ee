//! Grammar rules can be built with the builder pattern.

use crate::error::Result;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::{NonTerminal, Symbol};

/// The rule builder. Each alternative is validated and added to the grammar
/// as soon as it is given.
pub struct RuleBuilder<'a> {
    lhs: NonTerminal,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar, lhs: NonTerminal) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: NonTerminal) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<I, S>(self, syms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let rule = Rule::new(self.lhs.clone(), syms)?;
        self.grammar.add_rule(rule);
        Ok(self)
    }
}

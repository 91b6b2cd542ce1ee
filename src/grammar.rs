//! Grammars as sets of validated rules.

use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::error::{GrammarError, Result};
use crate::rule::builder::RuleBuilder;
use crate::rule::Rule;
use crate::symbol::{NonTerminal, Symbol, Terminal};

/// A context-free grammar: a set of rules. Rules are kept in a deterministic
/// order and duplicates collapse into one.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grammar {
    rules: BTreeSet<Rule>,
}

impl Grammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Grammar {
            rules: BTreeSet::new(),
        }
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: NonTerminal) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Adds an already validated rule. Returns whether the rule was new.
    pub fn add_rule(&mut self, rule: Rule) -> bool {
        self.rules.insert(rule)
    }

    /// Returns an iterator over all rules.
    pub fn rules(&self) -> btree_set::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns an iterator over the rules for the given nonterminal.
    pub fn rules_for<'a>(&'a self, lhs: &'a NonTerminal) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.lhs() == lhs)
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns every nonterminal that appears in the grammar, on either side
    /// of a rule.
    pub fn nonterminals(&self) -> BTreeSet<NonTerminal> {
        let mut result = BTreeSet::new();
        for rule in &self.rules {
            result.insert(rule.lhs().clone());
            result.extend(rule.rhs().iter().filter_map(Symbol::as_nonterminal).cloned());
        }
        result
    }

    /// Returns every terminal written in a right-hand side, ε included.
    pub fn terminals(&self) -> BTreeSet<Terminal> {
        self.rules
            .iter()
            .flat_map(|rule| rule.rhs().iter().filter_map(Symbol::as_terminal))
            .cloned()
            .collect()
    }

    /// Returns the terminals a parser may see as lookahead: every terminal
    /// except ε, and the end of input.
    pub fn lookahead_terminals(&self) -> BTreeSet<Terminal> {
        let mut result = self.terminals();
        result.remove(&Terminal::Empty);
        result.insert(Terminal::EndOfInput);
        result
    }

    /// Checks whether some rule has the start symbol on its left-hand side.
    pub fn has_start_rule(&self) -> bool {
        self.rules.iter().any(|rule| rule.lhs().is_start())
    }

    /// Fails unless some rule has the start symbol on its left-hand side.
    pub fn check_start(&self) -> Result<()> {
        if self.has_start_rule() {
            Ok(())
        } else {
            Err(GrammarError::MissingStartRule)
        }
    }
}

impl FromIterator<Rule> for Grammar {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Grammar {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Grammar {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Grammar {
    type Item = &'a Rule;
    type IntoIter = btree_set::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

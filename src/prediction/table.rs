//! The combined `nonterminal | FIRST | FOLLOW` table.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::symbol::{NonTerminal, Terminal};

use super::{FirstSets, FollowSets, PredictSets};

/// FIRST and FOLLOW sets of every nonterminal, side by side.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstFollowTable {
    first: FirstSets,
    follow: FollowSets,
}

impl FirstFollowTable {
    /// Computes the table. The grammar must have a rule for the start symbol.
    pub fn new(grammar: &Grammar) -> Result<Self> {
        grammar.check_start()?;
        let first = FirstSets::new(grammar);
        let follow = FollowSets::new(grammar, &first);
        Ok(FirstFollowTable { first, follow })
    }

    /// Returns the (FIRST, FOLLOW) pair of a nonterminal.
    pub fn get(&self, nonterminal: &NonTerminal) -> Option<(&BTreeSet<Terminal>, &BTreeSet<Terminal>)> {
        let first_set = self.first.get(nonterminal)?;
        let follow_set = self.follow.get(nonterminal)?;
        Some((first_set, follow_set))
    }

    /// Iterates over rows of the table in nonterminal order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&NonTerminal, &BTreeSet<Terminal>, &BTreeSet<Terminal>)> + '_ {
        self.first
            .predict_sets()
            .iter()
            .filter_map(move |(nonterminal, first_set)| {
                let follow_set = self.follow.get(nonterminal)?;
                Some((nonterminal, first_set, follow_set))
            })
    }

    /// Returns the FIRST sets.
    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    /// Returns the FOLLOW sets.
    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }
}

//! Prediction for predictive parsers: FIRST and FOLLOW set computation.

mod first;
mod follow;
mod table;

use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::Grammar;
use crate::symbol::{NonTerminal, Terminal};

pub use self::first::{first_set_for_string, FirstSets};
pub use self::follow::FollowSets;
pub use self::table::FirstFollowTable;

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<NonTerminal, BTreeSet<Terminal>>;

/// Access to computed per-nonterminal sets.
pub trait PredictSets {
    /// Returns a reference to the sets.
    fn predict_sets(&self) -> &PerSymbolSets;

    /// Returns the set for a nonterminal, if it was computed.
    fn get(&self, nonterminal: &NonTerminal) -> Option<&BTreeSet<Terminal>> {
        self.predict_sets().get(nonterminal)
    }
}

/// Computes prediction sets directly from a grammar.
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FOLLOW sets, computing FIRST sets along the way.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from already computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}

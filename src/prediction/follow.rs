//! FOLLOW sets.

use std::collections::BTreeSet;

use log::debug;

use crate::fixed_point::fixed_point;
use crate::grammar::Grammar;
use crate::symbol::{NonTerminal, Symbol, Terminal};

use super::first::first_set_for_string;
use super::{FirstSets, PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The start symbol is followed by the end of input; every other set
    /// starts out empty. FIRST sets stay fixed for the whole computation.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut initial: PerSymbolSets = grammar
            .nonterminals()
            .into_iter()
            .map(|nonterminal| (nonterminal, BTreeSet::new()))
            .collect();
        initial
            .entry(NonTerminal::Start)
            .or_default()
            .insert(Terminal::EndOfInput);

        let first = first_sets.predict_sets();
        let map = fixed_point(initial, |sets| next_stage(grammar, first, sets));
        debug!("computed FOLLOW sets of {} nonterminals", map.len());
        FollowSets { map }
    }

    /// Returns the underlying map.
    pub fn into_inner(self) -> PerSymbolSets {
        self.map
    }
}

impl PredictSets for FollowSets {
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

/// One step over all rules. For every rule `A -> α B β`, FOLLOW(B) gains
/// FIRST(β) without ε, and also FOLLOW(A) when β can vanish.
fn next_stage(grammar: &Grammar, first: &PerSymbolSets, prev: &PerSymbolSets) -> PerSymbolSets {
    let mut next = prev.clone();
    for rule in grammar.rules() {
        let rhs = rule.rhs();
        for (pos, sym) in rhs.iter().enumerate() {
            let nonterminal = match sym {
                Symbol::NonTerminal(nonterminal) => nonterminal,
                Symbol::Terminal(_) => continue,
            };
            let rest_first_set = first_set_for_string(first, &rhs[pos + 1..]);
            let followed = next.entry(nonterminal.clone()).or_default();
            if rest_first_set.contains(&Terminal::Empty) {
                if let Some(lhs_follow_set) = prev.get(rule.lhs()) {
                    followed.extend(lhs_follow_set.iter().cloned());
                }
            }
            followed.extend(rest_first_set.into_iter().filter(Terminal::is_lookahead));
        }
    }
    next
}

//! FIRST sets.

use std::collections::BTreeSet;

use log::debug;

use crate::fixed_point::fixed_point;
use crate::grammar::Grammar;
use crate::symbol::{Symbol, Terminal};

use super::{PerSymbolSets, PredictSets};

/// FIRST sets.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// FIRST(N) holds every terminal `a` such that `N` derives `a β`, and ε
    /// if `N` derives the empty string. Every set starts out empty and grows
    /// until no rule contributes anything new.
    pub fn new(grammar: &Grammar) -> Self {
        let initial: PerSymbolSets = grammar
            .nonterminals()
            .into_iter()
            .map(|nonterminal| (nonterminal, BTreeSet::new()))
            .collect();

        let map = fixed_point(initial, |sets| next_stage(grammar, sets));
        debug!("computed FIRST sets of {} nonterminals", map.len());
        FirstSets { map }
    }

    /// Calculates a FIRST set for a string of symbols.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> BTreeSet<Terminal> {
        first_set_for_string(&self.map, string)
    }

    /// Returns the underlying map.
    pub fn into_inner(self) -> PerSymbolSets {
        self.map
    }
}

impl PredictSets for FirstSets {
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

/// Calculates a FIRST set for a string of symbols, given a snapshot of FIRST
/// sets for nonterminals.
///
/// The FIRST set of the empty string is `{ε}`. Otherwise, symbols are scanned
/// left to right while the prefix seen so far can vanish. A nonterminal with no
/// entry in `sets` has no productions, so its FIRST set is empty.
pub fn first_set_for_string(sets: &PerSymbolSets, string: &[Symbol]) -> BTreeSet<Terminal> {
    let mut result = BTreeSet::new();
    for sym in string {
        match sym {
            Symbol::Terminal(terminal) => {
                result.insert(terminal.clone());
                return result;
            }
            Symbol::NonTerminal(nonterminal) => {
                let first_set = match sets.get(nonterminal) {
                    Some(first_set) => first_set,
                    None => return result,
                };
                result.extend(first_set.iter().filter(|t| t.is_lookahead()).cloned());
                if !first_set.contains(&Terminal::Empty) {
                    return result;
                }
            }
        }
    }
    result.insert(Terminal::Empty);
    result
}

/// One step: every nonterminal's set is unioned with the FIRST sets of its
/// rules' right-hand sides, evaluated over the previous snapshot.
pub(super) fn next_stage(grammar: &Grammar, prev: &PerSymbolSets) -> PerSymbolSets {
    let mut next = prev.clone();
    for rule in grammar.rules() {
        let rhs_first_set = first_set_for_string(prev, rule.rhs());
        next.entry(rule.lhs().clone())
            .or_default()
            .extend(rhs_first_set);
    }
    next
}

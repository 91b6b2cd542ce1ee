//! The Ll grammar class.

use std::collections::{btree_map, BTreeMap, BTreeSet};

use bit_vec::BitVec;
use log::debug;

use crate::error::Result;
use crate::fixed_point::fixed_point;
use crate::grammar::Grammar;
use crate::prediction::{FirstFollowTable, PredictSets};
use crate::rule::Rule;
use crate::symbol::{NonTerminal, Symbol, Terminal};

/// LL parse table.
///
/// Every pair of a nonterminal and a lookahead terminal has an entry. An empty
/// entry is a syntax error; an entry with more than one rule is a conflict.
pub struct LlParseTable<'a> {
    map: BTreeMap<LlParseTableKey, BTreeSet<Rule>>,
    grammar: &'a Grammar,
}

#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
struct LlParseTableKey {
    nonterminal: NonTerminal,
    terminal: Terminal,
}

/// A table entry with more than one applicable rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LlConflict<'t> {
    /// The nonterminal on top of the parse stack.
    pub nonterminal: &'t NonTerminal,
    /// The lookahead terminal.
    pub terminal: &'t Terminal,
    /// All applicable rules.
    pub rules: &'t BTreeSet<Rule>,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<NonTerminal, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl<'a> LlParseTable<'a> {
    /// Creates an LL parse table. The grammar must have a rule for the start
    /// symbol.
    pub fn new(grammar: &'a Grammar) -> Result<Self> {
        let table = FirstFollowTable::new(grammar)?;
        Self::with_table(grammar, &table)
    }

    /// Creates an LL parse table from FIRST and FOLLOW sets computed for the
    /// same grammar.
    pub fn with_table(grammar: &'a Grammar, table: &FirstFollowTable) -> Result<Self> {
        grammar.check_start()?;

        let mut map = BTreeMap::new();
        let lookahead = grammar.lookahead_terminals();
        for nonterminal in grammar.nonterminals() {
            for terminal in &lookahead {
                let key = LlParseTableKey {
                    nonterminal: nonterminal.clone(),
                    terminal: terminal.clone(),
                };
                map.insert(key, BTreeSet::new());
            }
        }

        let mut this = LlParseTable { map, grammar };
        let follow = table.follow_sets();
        // LlParseTable[A,a] contains the rule A → w if and only if
        // a is in FIRST(w) or
        // ε is in FIRST(w) and a is in FOLLOW(A).
        for rule in grammar.rules() {
            let rhs_first_set = table.first_sets().first_set_for_string(rule.rhs());
            for terminal in rhs_first_set.iter().filter(|t| t.is_lookahead()) {
                this.insert(rule, terminal);
            }
            if rhs_first_set.contains(&Terminal::Empty) {
                if let Some(lhs_follow_set) = follow.get(rule.lhs()) {
                    for terminal in lhs_follow_set {
                        this.insert(rule, terminal);
                    }
                }
            }
        }

        debug!(
            "LL parse table with {} entries and {} conflicts",
            this.map.len(),
            this.conflicts().count()
        );
        Ok(this)
    }

    fn insert(&mut self, rule: &Rule, terminal: &Terminal) {
        let key = LlParseTableKey {
            nonterminal: rule.lhs().clone(),
            terminal: terminal.clone(),
        };
        self.map.entry(key).or_default().insert(rule.clone());
    }

    /// Returns the rules applicable for `nonterminal` when the next input
    /// symbol is `terminal`. Returns `None` for a pair outside of the table.
    pub fn get(&self, nonterminal: &NonTerminal, terminal: &Terminal) -> Option<&BTreeSet<Rule>> {
        let key = LlParseTableKey {
            nonterminal: nonterminal.clone(),
            terminal: terminal.clone(),
        };
        self.map.get(&key)
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.map.iter(),
        }
    }

    /// Iterates over entries with more than one rule.
    pub fn conflicts(&self) -> impl Iterator<Item = LlConflict<'_>> + '_ {
        self.iter()
            .filter(|&(_, _, rules)| rules.len() > 1)
            .map(|(nonterminal, terminal, rules)| LlConflict {
                nonterminal,
                terminal,
                rules,
            })
    }

    /// Checks whether no entry has more than one rule.
    pub fn is_ll1(&self) -> bool {
        self.conflicts().next().is_none()
    }

    /// Classifies nonterminals as LL(1) or context-free.
    ///
    /// A nonterminal is context-free if it has a conflict, or if one of its
    /// rules mentions a context-free nonterminal.
    pub fn classify(&self) -> LlClassification {
        let mut result = LlClassification {
            classes: BTreeMap::new(),
        };
        for (key, rules) in &self.map {
            if rules.len() > 1 {
                result
                    .classes
                    .insert(key.nonterminal.clone(), LlNonterminalClass::ContextFree);
            } else {
                result
                    .classes
                    .entry(key.nonterminal.clone())
                    .or_insert(LlNonterminalClass::Ll1);
            }
        }

        let nonterminals: Vec<&NonTerminal> = result.classes.keys().collect();
        let index_of = |nonterminal: &NonTerminal| {
            nonterminals
                .binary_search_by(|probe| (*probe).cmp(nonterminal))
                .ok()
        };
        let mut property = BitVec::from_elem(nonterminals.len(), false);
        for (idx, &class) in result.classes.values().enumerate() {
            if let LlNonterminalClass::ContextFree = class {
                property.set(idx, true);
            }
        }
        let property = fixed_point(property, |prev| {
            let mut next = prev.clone();
            for rule in self.grammar.rules() {
                let reaches_context_free = rule
                    .rhs()
                    .iter()
                    .filter_map(Symbol::as_nonterminal)
                    .filter_map(index_of)
                    .any(|idx| prev[idx]);
                if let (true, Some(lhs_idx)) = (reaches_context_free, index_of(rule.lhs())) {
                    next.set(lhs_idx, true);
                }
            }
            next
        });

        for (idx, class) in result.classes.values_mut().enumerate() {
            if property[idx] {
                *class = LlNonterminalClass::ContextFree;
            }
        }
        result
    }
}

/// Iterator over `(nonterminal, terminal, rules)` entries of a parse table.
pub struct Iter<'t> {
    inner: btree_map::Iter<'t, LlParseTableKey, BTreeSet<Rule>>,
}

impl<'t> Iterator for Iter<'t> {
    type Item = (&'t NonTerminal, &'t Terminal, &'t BTreeSet<Rule>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, rules)| (&key.nonterminal, &key.terminal, rules))
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<NonTerminal, LlNonterminalClass> {
        &self.classes
    }
}

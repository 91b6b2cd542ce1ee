#![allow(dead_code)]

use std::collections::BTreeSet;

use cfg_ll1::*;

macro_rules! syms {
    ($($sym:expr),* $(,)?) => {
        vec![$(::cfg_ll1::Symbol::from($sym)),*]
    };
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn t(pattern: &str) -> Terminal {
    Terminal::custom(pattern).unwrap()
}

pub fn nt(name: &str) -> NonTerminal {
    NonTerminal::custom(name).unwrap()
}

pub fn rule(lhs: NonTerminal, rhs: Vec<Symbol>) -> Rule {
    Rule::new(lhs, rhs).unwrap()
}

pub fn terminals<const N: usize>(terminals: [Terminal; N]) -> BTreeSet<Terminal> {
    BTreeSet::from(terminals)
}

pub fn rules<const N: usize>(rules: [Rule; N]) -> BTreeSet<Rule> {
    BTreeSet::from(rules)
}

/// ```text
/// Start → a A B b
/// A → a A c | ε
/// B → b B | c
/// ```
pub fn nested_grammar() -> Grammar {
    let (a, b, c) = (t("a"), t("b"), t("c"));
    let (big_a, big_b) = (nt("A"), nt("B"));
    [
        rule(NonTerminal::Start, syms![&a, &big_a, &big_b, &b]),
        rule(big_a.clone(), syms![&a, &big_a, &c]),
        rule(big_a.clone(), syms![Terminal::Empty]),
        rule(big_b.clone(), syms![&b, &big_b]),
        rule(big_b.clone(), syms![&c]),
    ]
    .into_iter()
    .collect()
}

/// ```text
/// Start → T E'
/// E' → + T E' | ε
/// T → F T'
/// T' → * F T' | ε
/// F → ( Start ) | id
/// ```
pub fn expression_grammar() -> Grammar {
    let (plus, mul, lb, rb, id) = (t("\\+"), t("\\*"), t("\\("), t("\\)"), t("id"));
    let (e_, tt, t_, f) = (nt("E'"), nt("T"), nt("T'"), nt("F"));
    let mut grammar = Grammar::new();
    grammar
        .rule(NonTerminal::Start)
        .rhs(syms![&tt, &e_])
        .and_then(|r| r.rule(e_.clone()).rhs(syms![&plus, &tt, &e_]))
        .and_then(|r| r.rhs([Terminal::Empty]))
        .and_then(|r| r.rule(tt.clone()).rhs(syms![&f, &t_]))
        .and_then(|r| r.rule(t_.clone()).rhs(syms![&mul, &f, &t_]))
        .and_then(|r| r.rhs([Terminal::Empty]))
        .and_then(|r| r.rule(f.clone()).rhs(syms![&lb, NonTerminal::Start, &rb]))
        .and_then(|r| r.rhs([id.clone()]))
        .unwrap();
    grammar
}

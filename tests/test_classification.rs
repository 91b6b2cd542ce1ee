#[macro_use]
mod support;

use std::collections::BTreeMap;

use cfg_ll1::*;

use support::*;

#[test]
fn test_ll_classification() {
    let (x, y) = (t("x"), t("y"));
    let (a, b, c) = (nt("A"), nt("B"), nt("C"));
    let mut grammar = Grammar::new();

    grammar
        .rule(NonTerminal::Start)
        .rhs(syms![&a, &x, &b])
        .and_then(|r| r.rhs(syms![&c]))
        .and_then(|r| r.rule(b.clone()).rhs(syms![&a, &a]))
        .and_then(|r| r.rhs(syms![&a, &c]))
        .and_then(|r| r.rule(c.clone()).rhs(syms![&x]))
        .and_then(|r| r.rhs(syms![&y]))
        .and_then(|r| r.rule(a.clone()).rhs([Terminal::Empty]))
        .unwrap();

    let table = LlParseTable::new(&grammar).unwrap();
    let classification = table.classify();
    let classes = classification.classes();

    let mut map = BTreeMap::new();

    map.insert(NonTerminal::Start, LlNonterminalClass::ContextFree);
    map.insert(a, LlNonterminalClass::Ll1);
    map.insert(b, LlNonterminalClass::Ll1);
    map.insert(c, LlNonterminalClass::Ll1);

    assert_eq!(classes, &map);
}

#[test]
fn test_ll_transitive_classification() {
    let (x, y) = (t("x"), t("y"));
    let (a, b) = (nt("A"), nt("B"));
    let mut grammar = Grammar::new();

    grammar
        .rule(NonTerminal::Start)
        .rhs(syms![&a])
        .and_then(|r| r.rule(a.clone()).rhs(syms![&x, &b]))
        .and_then(|r| r.rule(b.clone()).rhs(syms![&x, &y]))
        .and_then(|r| r.rhs(syms![&x]))
        .unwrap();

    let table = LlParseTable::new(&grammar).unwrap();
    let classification = table.classify();
    let classes = classification.classes();

    let mut map = BTreeMap::new();

    map.insert(NonTerminal::Start, LlNonterminalClass::ContextFree);
    map.insert(a, LlNonterminalClass::ContextFree);
    map.insert(b, LlNonterminalClass::ContextFree);

    assert_eq!(classes, &map);
}

#[test]
fn test_expression_grammar_is_ll1() {
    let grammar = expression_grammar();
    let table = LlParseTable::new(&grammar).unwrap();
    let classification = table.classify();
    assert_eq!(classification.classes().len(), 5);
    assert!(classification
        .classes()
        .values()
        .all(|&class| class == LlNonterminalClass::Ll1));
}

#[macro_use]
mod support;

use cfg_ll1::*;

use support::*;

#[test]
fn test_nested_first_follow_table() {
    support::init_logging();
    let table = FirstFollowTable::new(&nested_grammar()).unwrap();
    let (a, b, c) = (t("a"), t("b"), t("c"));

    assert_eq!(
        table.get(&NonTerminal::Start),
        Some((&terminals([a.clone()]), &terminals([Terminal::EndOfInput])))
    );
    assert_eq!(
        table.get(&nt("A")),
        Some((
            &terminals([a.clone(), Terminal::Empty]),
            &terminals([b.clone(), c.clone()])
        ))
    );
    assert_eq!(
        table.get(&nt("B")),
        Some((&terminals([b.clone(), c]), &terminals([b])))
    );
    assert_eq!(table.iter().count(), 3);
}

#[test]
fn test_expression_first_follow_table() {
    let table = FirstFollowTable::new(&expression_grammar()).unwrap();
    let (plus, mul, lb, rb, id) = (t("\\+"), t("\\*"), t("\\("), t("\\)"), t("id"));
    let eoi = Terminal::EndOfInput;

    let expected = [
        (
            NonTerminal::Start,
            terminals([lb.clone(), id.clone()]),
            terminals([eoi.clone(), rb.clone()]),
        ),
        (
            nt("E'"),
            terminals([plus.clone(), Terminal::Empty]),
            terminals([eoi.clone(), rb.clone()]),
        ),
        (
            nt("T"),
            terminals([lb.clone(), id.clone()]),
            terminals([eoi.clone(), rb.clone(), plus.clone()]),
        ),
        (
            nt("T'"),
            terminals([mul.clone(), Terminal::Empty]),
            terminals([eoi.clone(), rb.clone(), plus.clone()]),
        ),
        (
            nt("F"),
            terminals([lb, id]),
            terminals([eoi, rb, plus, mul]),
        ),
    ];
    for (nonterminal, first_set, follow_set) in &expected {
        assert_eq!(
            table.get(nonterminal),
            Some((first_set, follow_set)),
            "row for {}",
            nonterminal
        );
    }
}

#[test]
fn test_missing_start_rule() {
    let mut grammar = Grammar::new();
    grammar.rule(nt("A")).rhs([t("a")]).unwrap();
    assert_eq!(
        FirstFollowTable::new(&grammar),
        Err(GrammarError::MissingStartRule)
    );
    // The sets themselves can still be computed directly.
    assert_eq!(
        grammar.first_sets().get(&nt("A")),
        Some(&terminals([t("a")]))
    );
}

#[test]
fn test_start_follow_always_has_end_of_input() {
    for grammar in [nested_grammar(), expression_grammar()] {
        let follow = grammar.follow_sets();
        let start_follow = follow.get(&NonTerminal::Start).unwrap();
        assert!(start_follow.contains(&Terminal::EndOfInput));
    }
}

#[test]
fn test_recomputation_is_idempotent() {
    let grammar = expression_grammar();
    let first = grammar.first_sets();
    assert_eq!(first, grammar.first_sets());
    assert_eq!(grammar.follow_sets_with_first(&first), grammar.follow_sets());
    assert_eq!(
        FirstFollowTable::new(&grammar),
        FirstFollowTable::new(&grammar)
    );
}

#[test]
fn test_undefined_nonterminal_has_empty_first_set() {
    // Start → U a, where U has no rules.
    let mut grammar = Grammar::new();
    grammar
        .rule(NonTerminal::Start)
        .rhs(syms![nt("U"), t("a")])
        .unwrap();
    let table = FirstFollowTable::new(&grammar).unwrap();
    assert_eq!(
        table.get(&NonTerminal::Start),
        Some((&terminals([]), &terminals([Terminal::EndOfInput])))
    );
    assert_eq!(
        table.get(&nt("U")),
        Some((&terminals([]), &terminals([t("a")])))
    );
}

#[test]
fn test_first_set_for_string() {
    let first = expression_grammar().first_sets();
    let string = syms![nt("T'"), nt("E'")];
    assert_eq!(
        first.first_set_for_string(&string),
        terminals([t("\\+"), t("\\*"), Terminal::Empty])
    );
    assert_eq!(
        first_set_for_string(first.predict_sets(), &[]),
        terminals([Terminal::Empty])
    );
}

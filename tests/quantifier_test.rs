// quantifier_test.rs - Quantifier bounds and greediness over built trees.

mod common;

use common::*;
use regsema::prelude::*;

fn quantified(markers: Vec<Shape>) -> RegexTree {
    build(seq(vec![quant(ch("a"), markers)]))
}

fn counted(min: Option<&str>, comma: bool, max: Option<&str>, suffix: Option<Shape>) -> RegexTree {
    let mut markers = interval(min, comma, max);
    markers.extend(suffix);
    quantified(markers)
}

fn first(tree: &RegexTree) -> Quantifier<'_> {
    tree.iter().find_map(Quantifier::cast).unwrap()
}

#[test]
fn simple_markers_and_modes() {
    let cases = [
        (vec![quest()], Count::ZERO_OR_ONE, QuantifierType::Greedy),
        (vec![star()], Count::ZERO_OR_MORE, QuantifierType::Greedy),
        (vec![plus()], Count::ONE_OR_MORE, QuantifierType::Greedy),
        (vec![quest(), quest()], Count::ZERO_OR_ONE, QuantifierType::Reluctant),
        (vec![star(), quest()], Count::ZERO_OR_MORE, QuantifierType::Reluctant),
        (vec![plus(), plus()], Count::ONE_OR_MORE, QuantifierType::Possessive),
        (vec![star(), plus()], Count::ZERO_OR_MORE, QuantifierType::Possessive),
    ];
    for (markers, count, ty) in cases {
        let tree = quantified(markers);
        let q = first(&tree);
        assert_eq!(q.count(), count, "{}", tree.source());
        assert_eq!(q.quantifier_type(), ty, "{}", tree.source());
        assert!(!q.is_counted());
    }
}

#[test]
fn bounded_interval() {
    // a{2,5}
    let tree = counted(Some("2"), true, Some("5"), None);
    let q = first(&tree);
    assert!(q.is_counted());
    assert_eq!(q.count(), Count::new(2, 5));
    assert_eq!(q.quantifier_type(), QuantifierType::Greedy);
    assert_eq!(q.min_number().unwrap().text(), "2");
    assert_eq!(q.max_number().unwrap().text(), "5");
    assert_eq!(q.count().to_string(), "{2,5}");
}

#[test]
fn reluctant_and_possessive_intervals() {
    // a{2,5}?  a{3}+
    let tree = counted(Some("2"), true, Some("5"), Some(quest()));
    assert_eq!(first(&tree).quantifier_type(), QuantifierType::Reluctant);
    assert_eq!(first(&tree).count(), Count::new(2, 5));

    let tree = counted(Some("3"), false, None, Some(plus()));
    assert_eq!(first(&tree).quantifier_type(), QuantifierType::Possessive);
    assert_eq!(first(&tree).count(), Count::new(3, 3));
}

#[test]
fn open_upper_bound() {
    // a{2,}
    let tree = counted(Some("2"), true, None, None);
    let count = first(&tree).count();
    assert_eq!(count, Count::new(2, INFINITE_REPEAT));
    assert!(count.is_unbounded());
    assert!(count.is_well_formed());
    assert_eq!(count.to_string(), "{2,}");
    assert!(first(&tree).max_number().is_none());
}

#[test]
fn finite_bound_never_reads_as_unbounded() {
    // a{2147483647}, a{0,2147483647}, a{2147483647,}
    for tree in [
        counted(Some("2147483647"), false, None, None),
        counted(Some("0"), true, Some("2147483647"), None),
        counted(Some("2147483647"), true, None, None),
    ] {
        let count = first(&tree).count();
        assert_eq!(count, Count::INVALID, "{}", tree.source());
        assert!(!count.is_unbounded(), "{}", tree.source());
    }

    // a{2147483646} stays an exact count
    let tree = counted(Some("2147483646"), false, None, None);
    let count = first(&tree).count();
    assert_eq!(count, Count::new(2147483646, 2147483646));
    assert!(!count.is_unbounded());
    assert_eq!(count.to_string(), "{2147483646}");
}

#[test]
fn missing_lower_bound_is_invalid() {
    // a{,5}
    let tree = counted(None, true, Some("5"), None);
    let q = first(&tree);
    assert_eq!(q.count(), Count::INVALID);
    assert!(!q.count().is_valid());
    assert!(q.min_number().is_none());
    assert_eq!(q.max_number().unwrap().value(), Some(5));
}

#[test]
fn reversed_bounds_are_reported_as_written() {
    // a{5,2}
    let tree = counted(Some("5"), true, Some("2"), None);
    let count = first(&tree).count();
    assert_eq!(count, Count::new(5, 2));
    assert!(count.is_valid());
    assert!(!count.is_well_formed());
}

#[test]
fn atom_is_the_repeated_element() {
    // (ab)*  [a-z]+  \d?
    let tree = build(seq(vec![
        quant(capture(seq(lit("ab"))), vec![star()]),
        quant(class(false, vec![range("a", Some("z"))]), vec![plus()]),
        quant(simple_class("\\d"), vec![quest()]),
    ]));
    let atoms: Vec<_> = tree
        .iter()
        .filter_map(Quantifier::cast)
        .filter_map(|q| q.atom())
        .collect();
    assert!(matches!(atoms[0], Element::Group(g) if g.text() == "(ab)"));
    assert!(matches!(atoms[1], Element::Class(c) if !c.is_negated()));
    assert!(matches!(atoms[2], Element::SimpleClass(s) if s.kind() == Some(SimpleClassKind::Digit)));
}

#[test]
fn nested_quantifiers_are_independent() {
    // (a{2})*?
    let tree = build(seq(vec![quant(
        capture(seq(vec![quant(ch("a"), interval(Some("2"), false, None))])),
        vec![star(), quest()],
    )]));
    let qs: Vec<_> = tree.iter().filter_map(Quantifier::cast).collect();
    assert_eq!(qs[0].count(), Count::ZERO_OR_MORE);
    assert_eq!(qs[0].quantifier_type(), QuantifierType::Reluctant);
    assert_eq!(qs[1].count(), Count::new(2, 2));
    assert_eq!(qs[1].quantifier_type(), QuantifierType::Greedy);
}

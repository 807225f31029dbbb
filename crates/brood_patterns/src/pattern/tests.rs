use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::Fixture;
use crate::{between, one, zero_or_more};

#[test]
fn list_keeps_order() {
    let fx = Fixture::new();
    let list = PatternList::new([one([&fx.e1]), one([&fx.e2]), zero_or_more([&fx.e3, &fx.e2])]);
    let list = match list {
        Ok(list) => list,
        Err(err) => panic!("valid list rejected: {err}"),
    };

    assert_eq!(list.len(), 3);
    let types: Vec<String> = list.iter().map(ChildPattern::type_list).collect();
    assert_eq!(types, vec!["E1", "E2", "[E3, E2]"]);
    assert_eq!(list.get(1).map(ChildPattern::type_list), Some("E2".to_owned()));
    assert!(list.get(3).is_none());
}

#[test]
fn empty_list_is_valid() {
    let list = PatternList::new(Vec::new());
    assert!(matches!(list, Ok(ref l) if l.is_empty()));
}

#[test]
fn rejects_pattern_without_shapes() {
    let fx = Fixture::new();
    let empty: [ShapeSpec; 0] = [];
    let err = PatternList::new([one([&fx.e1]), one(empty)]).err();
    assert_eq!(err, Some(PatternError::NoShapes { index: 1 }));
}

#[test]
fn rejects_inverted_bounds() {
    let fx = Fixture::new();
    let err = PatternList::new([between(5, 2, [&fx.e1])]).err();
    assert_eq!(
        err,
        Some(PatternError::InvertedBounds {
            index: 0,
            min: 5,
            max: 2
        })
    );
}

#[test]
fn debug_summarizes() {
    let fx = Fixture::new();
    let pattern = one([&fx.e1]).with_mapper(|node: &ChildNode, _: &Props| node.clone());
    let text = format!("{pattern:?}");
    assert!(text.contains("\"E1\""));
    assert!(text.contains("mapped: true"));
}

use brood_node::PropValue;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{has_rand, Fixture};

#[test]
fn builder_ranges() {
    let fx = Fixture::new();
    let cases = [
        (zero_or_one([&fx.e1]), 0, Some(1)),
        (zero_or_more([&fx.e1]), 0, None),
        (one([&fx.e1]), 1, Some(1)),
        (one_or_more([&fx.e1]), 1, None),
        (exactly(3, [&fx.e1]), 3, Some(3)),
        (at_least(2, [&fx.e1]), 2, None),
        (at_most(4, [&fx.e1]), 0, Some(4)),
        (between(2, 5, [&fx.e1]), 2, Some(5)),
    ];

    for (pattern, min, max) in cases {
        assert_eq!(pattern.cardinality(), Cardinality::new(min, max));
        assert!(pattern.mapper().is_none());
    }
}

#[test]
fn shapes_keep_declaration_order() {
    let fx = Fixture::new();
    let pattern = zero_or_more([&fx.e1, &fx.e2, &fx.e3]);
    let names: Vec<&str> = pattern.shapes().iter().map(ShapeSpec::name).collect();
    assert_eq!(names, vec!["E1", "E2", "E3"]);
    assert_eq!(pattern.type_list(), "[E1, E2, E3]");
}

#[test]
fn mixed_shape_kinds() {
    let fx = Fixture::new();
    let pattern = one_or_more([ShapeSpec::from("div"), ShapeSpec::from(&fx.e1), has_rand()]);
    assert_eq!(pattern.type_list(), "[div, E1, has_rand]");
}

#[test]
fn with_mapper_leaves_original_untouched() {
    let fx = Fixture::new();
    let plain = one([&fx.e3]);
    let mapped = with_mapper(&plain, |node: &ChildNode, _: &Props| node.with_prop("rand", 100));

    assert!(plain.mapper().is_none());
    assert_eq!(mapped.cardinality(), plain.cardinality());
    assert_eq!(mapped.type_list(), plain.type_list());

    let mapper = mapped.mapper().map(std::sync::Arc::clone);
    let out = mapper.map(|f| f(&fx.e3(1), &Props::new()));
    assert_eq!(
        out.as_ref().and_then(|n| n.prop("rand")),
        Some(&PropValue::Int(100))
    );
}

use pretty_assertions::assert_eq;

use super::*;

fn too_few(types: &str, expected: Quantifier, received: usize, failed_on: Option<&str>) -> MatchError {
    CountMismatch {
        direction: CountDirection::TooFew,
        types: types.to_owned(),
        owner: "ParentComponent".to_owned(),
        expected,
        received,
        failed_on: failed_on.map(str::to_owned),
    }
    .into()
}

#[test]
fn count_mismatch_when_starved() {
    let err = too_few("E2", Quantifier::Exactly(1), 0, None);
    assert_eq!(
        err.to_string(),
        "Too few children of type E2 for <ParentComponent />. Expected 1, Received: 0."
    );
    assert_eq!(err.code(), ErrorCode::M0001);
    assert_eq!(err.owner(), "ParentComponent");
}

#[test]
fn count_mismatch_with_failure_detail() {
    let err = too_few("E1", Quantifier::AtLeast(3), 1, Some("<E2 />"));
    assert_eq!(
        err.to_string(),
        "Too few children of type E1 for <ParentComponent />. Expected at least 3, Received: 1. \
         Failed validation on <E2 />."
    );
}

#[test]
fn count_mismatch_between() {
    let err = too_few("E1", Quantifier::Between(2, 5), 1, None);
    assert_eq!(
        err.to_string(),
        "Too few children of type E1 for <ParentComponent />. Expected between [2, 5], Received: 1."
    );
}

#[test]
fn too_many_direction() {
    let err = MatchError::from(CountMismatch {
        direction: CountDirection::TooMany,
        types: "[E1, E2]".to_owned(),
        owner: "List".to_owned(),
        expected: Quantifier::AtMost(2),
        received: 3,
        failed_on: None,
    });
    assert_eq!(
        err.to_string(),
        "Too many children of type [E1, E2] for <List />. Expected at most 2, Received: 3."
    );
}

#[test]
fn unmatched_children() {
    let err = MatchError::from(UnmatchedChildren {
        owner: "Owner".to_owned(),
        matched: 2,
        total: 3,
    });
    assert_eq!(
        err.to_string(),
        "Too many children passed to <Owner />. Matched 2 of 3."
    );
    assert_eq!(err.code(), ErrorCode::M0002);
    assert_eq!(err.owner(), "Owner");
}

#[test]
fn pattern_errors() {
    let err = PatternError::NoShapes { index: 2 };
    assert_eq!(err.to_string(), "pattern 2 accepts no shapes");
    assert_eq!(err.code(), ErrorCode::M0101);

    let err = PatternError::InvertedBounds {
        index: 0,
        min: 5,
        max: 2,
    };
    assert_eq!(
        err.to_string(),
        "pattern 0 expects at least 5 but at most 2 children"
    );
    assert_eq!(err.code(), ErrorCode::M0102);
}

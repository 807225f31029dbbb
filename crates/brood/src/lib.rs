//! Brood - declare, validate and destructure the children of UI components.
//!
//! A component declares the shape of its children as an ordered list of
//! patterns. Brood checks the children a host passes against that list and
//! hands back one result per pattern: a single node, a list of nodes, or
//! nothing for an unmatched optional pattern.
//!
//! ```text
//! let patterns = PatternList::new([
//!     one([&element1]),
//!     one([&element2]),
//!     zero_or_more([&element3, &element2]),
//! ])?;
//! ```
//!
//! Hosts usually go through the [`Component`] trait, which wires validation
//! (strict, no mappers) and destructuring (lenient, mappers applied) to a
//! component's own patterns and props.
//!
//! Set `BROOD_LOG` (or `RUST_LOG`) and call [`init_tracing`] to see matcher
//! runs, e.g. `BROOD_LOG=brood_patterns=trace`.

mod component;
mod tracing_setup;

pub use component::{prop_type_warning, Component};
pub use tracing_setup::init_tracing;

pub use brood_diagnostic::{
    render, CountDirection, CountMismatch, ErrorCode, MatchError, PatternError, Quantifier,
    UnmatchedChildren,
};
pub use brood_node::{ChildNode, ComponentId, PropValue, Props, ShapeTag};
pub use brood_patterns::{
    any_matches, at_least, at_most, between, exactly, one, one_or_more, with_mapper, zero_or_more,
    zero_or_one, Cardinality, ChildPattern, Mapper, MatchOptions, MatchResult, Matcher,
    PatternList, Predicate, ShapeSpec,
};

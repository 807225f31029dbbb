//! Brood Patterns - declared child shapes and the matcher that checks them.
//!
//! This crate provides:
//! - Shape specifiers (`ShapeSpec`) and their resolution against a node
//! - Cardinality ranges (`Cardinality`)
//! - Child patterns and validated pattern lists (`ChildPattern`, `PatternList`)
//! - Builder functions (`one`, `zero_or_more`, `between`, ...)
//! - The greedy matcher (`Matcher`) and its options (`MatchOptions`)
//!
//! # Matching
//!
//! Patterns are consumed left to right with a single cursor. Each pattern
//! takes the longest run of matching children starting at the cursor (capped
//! by its maximum) before the next pattern runs. There is no backtracking: a
//! run never gives children back to a later pattern, which keeps matching
//! linear and error messages unambiguous.
//!
//! ```text
//! let patterns = PatternList::new([one([&e1]), one([&e2]), zero_or_more([&e3, &e2])])?;
//! let results = Matcher::new(&children, &patterns, "Wrapper1")
//!     .with_options(MatchOptions::validating())
//!     .match_all()?;
//! ```

mod cardinality;
mod factory;
mod matcher;
mod options;
mod pattern;
mod shape;

pub use cardinality::Cardinality;
pub use factory::{
    at_least, at_most, between, exactly, one, one_or_more, with_mapper, zero_or_more, zero_or_one,
};
pub use matcher::{MatchResult, Matcher};
pub use options::MatchOptions;
pub use pattern::{ChildPattern, Mapper, PatternList};
pub use shape::{any_matches, Predicate, ShapeSpec};

#[cfg(test)]
mod test_helpers;

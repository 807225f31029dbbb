//! Pattern builders.
//!
//! Each builder accepts anything convertible into shapes: tag strings,
//! `&ComponentId`s, or prebuilt `ShapeSpec`s (mix kinds by converting to
//! `ShapeSpec` first).
//!
//! | builder          | min | max       |
//! |------------------|-----|-----------|
//! | `zero_or_one`    | 0   | 1         |
//! | `zero_or_more`   | 0   | unbounded |
//! | `one`            | 1   | 1         |
//! | `one_or_more`    | 1   | unbounded |
//! | `exactly(n)`     | n   | n         |
//! | `at_least(n)`    | n   | unbounded |
//! | `at_most(n)`     | 0   | n         |
//! | `between(lo,hi)` | lo  | hi        |

use brood_node::{ChildNode, Props};

use crate::{Cardinality, ChildPattern, ShapeSpec};

pub fn zero_or_one<I, S>(shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(0, Some(1)))
}

pub fn zero_or_more<I, S>(shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(0, None))
}

pub fn one<I, S>(shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(1, Some(1)))
}

pub fn one_or_more<I, S>(shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(1, None))
}

pub fn exactly<I, S>(count: usize, shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(count, Some(count)))
}

pub fn at_least<I, S>(count: usize, shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(count, None))
}

pub fn at_most<I, S>(count: usize, shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(0, Some(count)))
}

/// `min..=max` children. An inverted range is rejected by
/// [`PatternList::new`](crate::PatternList::new).
pub fn between<I, S>(min: usize, max: usize, shapes: I) -> ChildPattern
where
    I: IntoIterator<Item = S>,
    S: Into<ShapeSpec>,
{
    ChildPattern::new(shapes, Cardinality::new(min, Some(max)))
}

/// Free-function form of [`ChildPattern::with_mapper`].
pub fn with_mapper<F>(pattern: &ChildPattern, mapper: F) -> ChildPattern
where
    F: Fn(&ChildNode, &Props) -> ChildNode + Send + Sync + 'static,
{
    pattern.with_mapper(mapper)
}

#[cfg(test)]
mod tests;

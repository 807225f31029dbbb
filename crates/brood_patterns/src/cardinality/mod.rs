//! How many children a pattern accepts.

use brood_diagnostic::Quantifier;

/// An inclusive `min..=max` range; `max: None` is unbounded.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Cardinality {
    pub min: usize,
    pub max: Option<usize>,
}

impl Cardinality {
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Cardinality { min, max }
    }

    /// Whether the pattern yields a single (optional) node rather than a list.
    pub fn is_single(&self) -> bool {
        matches!(self.max, Some(max) if max <= 1)
    }

    /// Whether `count` children satisfy the range.
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    /// Most children a run may take, `usize::MAX` when unbounded.
    pub fn cap(&self) -> usize {
        self.max.unwrap_or(usize::MAX)
    }

    /// Whether `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        self.max.is_none_or(|max| self.min <= max)
    }

    pub fn quantifier(&self) -> Quantifier {
        Quantifier::for_bounds(self.min, self.max)
    }
}

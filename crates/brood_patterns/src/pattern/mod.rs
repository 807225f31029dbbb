//! Child patterns and pattern lists.

use std::fmt;
use std::sync::Arc;

use brood_diagnostic::{render, PatternError};
use brood_node::{ChildNode, Props};
use smallvec::SmallVec;

use crate::{Cardinality, ShapeSpec};

/// Transform applied to each matched child.
///
/// Receives the matched node and the caller's context and returns the node
/// to report. Nodes are immutable, so a mapper can only ever produce a new
/// node; the input is never changed.
pub type Mapper = Arc<dyn Fn(&ChildNode, &Props) -> ChildNode + Send + Sync>;

/// One declared rule: accepted shapes, a count range, an optional mapper.
#[derive(Clone)]
pub struct ChildPattern {
    shapes: SmallVec<[ShapeSpec; 2]>,
    cardinality: Cardinality,
    mapper: Option<Mapper>,
}

impl ChildPattern {
    pub fn new<I, S>(shapes: I, cardinality: Cardinality) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ShapeSpec>,
    {
        ChildPattern {
            shapes: shapes.into_iter().map(Into::into).collect(),
            cardinality,
            mapper: None,
        }
    }

    pub fn shapes(&self) -> &[ShapeSpec] {
        &self.shapes
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn mapper(&self) -> Option<&Mapper> {
        self.mapper.as_ref()
    }

    /// A copy of this pattern that maps every matched child through `mapper`.
    ///
    /// The receiver keeps its own mapper (or lack of one).
    #[must_use]
    pub fn with_mapper<F>(&self, mapper: F) -> Self
    where
        F: Fn(&ChildNode, &Props) -> ChildNode + Send + Sync + 'static,
    {
        ChildPattern {
            mapper: Some(Arc::new(mapper)),
            ..self.clone()
        }
    }

    /// Rendered shape list for error messages.
    pub fn type_list(&self) -> String {
        render::type_list(self.shapes.iter().map(ShapeSpec::name))
    }

    fn check(&self, index: usize) -> Result<(), PatternError> {
        if self.shapes.is_empty() {
            return Err(PatternError::NoShapes { index });
        }
        match self.cardinality.max {
            Some(max) if !self.cardinality.is_well_formed() => Err(PatternError::InvertedBounds {
                index,
                min: self.cardinality.min,
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for ChildPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildPattern")
            .field("shapes", &self.type_list())
            .field("cardinality", &self.cardinality)
            .field("mapped", &self.mapper.is_some())
            .finish()
    }
}

/// An ordered, validated list of patterns.
///
/// Order is the consumption order of the children, not a priority.
#[derive(Clone, Debug, Default)]
pub struct PatternList {
    patterns: Vec<ChildPattern>,
}

impl PatternList {
    /// Validate and collect `patterns`.
    ///
    /// Every pattern must accept at least one shape and have `min <= max`.
    pub fn new(patterns: impl IntoIterator<Item = ChildPattern>) -> Result<Self, PatternError> {
        let patterns: Vec<ChildPattern> = patterns.into_iter().collect();
        for (index, pattern) in patterns.iter().enumerate() {
            pattern.check(index)?;
        }
        Ok(PatternList { patterns })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildPattern> {
        self.patterns.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ChildPattern> {
        self.patterns.get(index)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternList {
    type Item = &'a ChildPattern;
    type IntoIter = std::slice::Iter<'a, ChildPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests;

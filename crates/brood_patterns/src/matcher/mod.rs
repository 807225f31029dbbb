//! The greedy child matcher.
//!
//! One forward pass over the children. Each pattern takes the longest run of
//! matching children at the cursor, up to its maximum; the first child that
//! does not match ends the run for good, even when a later pattern could
//! have used a different split. A run of `zero_or_more(T)` followed by
//! `one(T)` therefore always starves the second pattern.

use std::borrow::Cow;
use std::convert::Infallible;

use brood_diagnostic::{render, CountDirection, CountMismatch, MatchError, UnmatchedChildren};
use brood_node::{ChildNode, Props};

use crate::{any_matches, Cardinality, ChildPattern, MatchOptions, PatternList};

/// What one pattern produced.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    /// The child matched by a pattern whose maximum is at most one.
    One(ChildNode),
    /// Every child matched by a pattern whose maximum exceeds one
    /// (possibly none).
    Many(Vec<ChildNode>),
    /// A pattern whose maximum is at most one matched nothing.
    Absent,
}

impl MatchResult {
    fn from_run(cardinality: Cardinality, nodes: Vec<ChildNode>) -> Self {
        if cardinality.is_single() {
            nodes
                .into_iter()
                .next()
                .map_or(MatchResult::Absent, MatchResult::One)
        } else {
            MatchResult::Many(nodes)
        }
    }

    pub fn as_one(&self) -> Option<&ChildNode> {
        match self {
            MatchResult::One(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[ChildNode]> {
        match self {
            MatchResult::Many(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MatchResult::Absent)
    }

    /// Flatten into the matched children, in order.
    pub fn into_nodes(self) -> Vec<ChildNode> {
        match self {
            MatchResult::One(node) => vec![node],
            MatchResult::Many(nodes) => nodes,
            MatchResult::Absent => Vec::new(),
        }
    }
}

/// Children consumed by one pattern and the cursor after them.
struct Run {
    nodes: Vec<ChildNode>,
    next: usize,
}

/// Matches a parent's children against its declared patterns.
///
/// All state is per call: a `Matcher` only borrows its inputs, and
/// `match_all` can be called any number of times with the same result.
pub struct Matcher<'a> {
    children: &'a [ChildNode],
    patterns: &'a PatternList,
    owner: &'a str,
    options: MatchOptions,
    context: Cow<'a, Props>,
}

impl<'a> Matcher<'a> {
    /// A lenient matcher with mappers enabled and an empty context.
    pub fn new(children: &'a [ChildNode], patterns: &'a PatternList, owner: &'a str) -> Self {
        Matcher {
            children,
            patterns,
            owner,
            options: MatchOptions::default(),
            context: Cow::Owned(Props::new()),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Context handed to every mapper call, usually the parent's props.
    #[must_use]
    pub fn with_context(mut self, context: &'a Props) -> Self {
        self.context = Cow::Borrowed(context);
        self
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Match every pattern in order.
    ///
    /// In strict mode the first violation is returned and later patterns
    /// are not evaluated. Otherwise violations are tolerated and the
    /// partial result is returned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(owner = self.owner, children = self.children.len(), patterns = self.patterns.len())
    )]
    pub fn match_all(&self) -> Result<Vec<MatchResult>, MatchError> {
        if !self.options.strict {
            return Ok(self.match_partial());
        }
        self.scan(|err| {
            tracing::debug!(code = %err.code(), %err, "child violation");
            Err(err)
        })
    }

    /// Best-effort match that never fails, regardless of `strict`.
    pub fn match_partial(&self) -> Vec<MatchResult> {
        let Ok(results) = self.scan(|err| -> Result<(), Infallible> {
            tracing::debug!(code = %err.code(), %err, "tolerating child violation");
            Ok(())
        });
        results
    }

    fn scan<E>(
        &self,
        mut on_violation: impl FnMut(MatchError) -> Result<(), E>,
    ) -> Result<Vec<MatchResult>, E> {
        let mut results = Vec::with_capacity(self.patterns.len());
        let mut cursor = 0;

        for pattern in self.patterns {
            let run = self.run(pattern, cursor);
            tracing::trace!(
                types = %pattern.type_list(),
                start = cursor,
                matched = run.nodes.len(),
                "pattern run"
            );
            if let Some(err) = self.count_mismatch(pattern, &run) {
                on_violation(err)?;
            }
            cursor = run.next;
            results.push(MatchResult::from_run(pattern.cardinality(), run.nodes));
        }

        if cursor < self.children.len() {
            on_violation(
                UnmatchedChildren {
                    owner: self.owner.to_owned(),
                    matched: cursor,
                    total: self.children.len(),
                }
                .into(),
            )?;
        }
        Ok(results)
    }

    /// Take the longest matching run at `cursor`, capped by the pattern's
    /// maximum.
    fn run(&self, pattern: &ChildPattern, cursor: usize) -> Run {
        let rest = self.children.get(cursor..).unwrap_or_default();
        let nodes: Vec<ChildNode> = rest
            .iter()
            .take(pattern.cardinality().cap())
            .take_while(|node| any_matches(pattern.shapes(), node))
            .map(|node| self.project(pattern, node))
            .collect();
        Run {
            next: cursor + nodes.len(),
            nodes,
        }
    }

    fn project(&self, pattern: &ChildPattern, node: &ChildNode) -> ChildNode {
        match pattern.mapper() {
            Some(mapper) if self.options.apply_mappers => mapper(node, &*self.context),
            _ => node.clone(),
        }
    }

    fn count_mismatch(&self, pattern: &ChildPattern, run: &Run) -> Option<MatchError> {
        let cardinality = pattern.cardinality();
        let received = run.nodes.len();
        if cardinality.admits(received) {
            return None;
        }

        let direction = if received < cardinality.min {
            CountDirection::TooFew
        } else {
            CountDirection::TooMany
        };
        Some(
            CountMismatch {
                direction,
                types: pattern.type_list(),
                owner: self.owner.to_owned(),
                expected: cardinality.quantifier(),
                received,
                failed_on: self.children.get(run.next).map(render::pretty_node),
            }
            .into(),
        )
    }
}

//! Matcher and pattern errors.
//!
//! Both match errors are fatal to a strict match call; lenient calls never
//! surface them. Pattern errors are raised earlier, when a pattern list is
//! built, so an ill-formed pattern never reaches the matcher.

use std::fmt;

use crate::{ErrorCode, Quantifier};

/// Whether a pattern came up short or overflowed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CountDirection {
    TooFew,
    TooMany,
}

impl fmt::Display for CountDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountDirection::TooFew => f.write_str("Too few"),
            CountDirection::TooMany => f.write_str("Too many"),
        }
    }
}

/// A pattern matched a number of children outside its range.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CountMismatch {
    pub direction: CountDirection,
    /// Rendered shape list, see [`crate::render::type_list`].
    pub types: String,
    /// Display name of the owning component.
    pub owner: String,
    pub expected: Quantifier,
    pub received: usize,
    /// Rendered node the run stopped on; `None` when the children ran out.
    pub failed_on: Option<String>,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} children of type {} for <{} />. Expected {}, Received: {}.",
            self.direction, self.types, self.owner, self.expected, self.received
        )?;
        if let Some(node) = &self.failed_on {
            write!(f, " Failed validation on {node}.")?;
        }
        Ok(())
    }
}

/// Children were left over after the last pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnmatchedChildren {
    pub owner: String,
    /// Cursor position after the last pattern.
    pub matched: usize,
    pub total: usize,
}

impl fmt::Display for UnmatchedChildren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Too many children passed to <{} />. Matched {} of {}.",
            self.owner, self.matched, self.total
        )
    }
}

/// A strict match failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{0}")]
    CountMismatch(CountMismatch),
    #[error("{0}")]
    UnmatchedChildren(UnmatchedChildren),
}

impl MatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::CountMismatch(_) => ErrorCode::M0001,
            MatchError::UnmatchedChildren(_) => ErrorCode::M0002,
        }
    }

    /// Display name of the component whose children failed.
    pub fn owner(&self) -> &str {
        match self {
            MatchError::CountMismatch(err) => &err.owner,
            MatchError::UnmatchedChildren(err) => &err.owner,
        }
    }
}

impl From<CountMismatch> for MatchError {
    fn from(err: CountMismatch) -> Self {
        MatchError::CountMismatch(err)
    }
}

impl From<UnmatchedChildren> for MatchError {
    fn from(err: UnmatchedChildren) -> Self {
        MatchError::UnmatchedChildren(err)
    }
}

/// An ill-formed pattern declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern {index} accepts no shapes")]
    NoShapes { index: usize },
    #[error("pattern {index} expects at least {min} but at most {max} children")]
    InvertedBounds { index: usize, min: usize, max: usize },
}

impl PatternError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PatternError::NoShapes { .. } => ErrorCode::M0101,
            PatternError::InvertedBounds { .. } => ErrorCode::M0102,
        }
    }
}

#[cfg(test)]
mod tests;

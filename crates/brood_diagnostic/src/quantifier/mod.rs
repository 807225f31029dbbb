//! Quantifier phrases for count errors.

use std::fmt;

/// How many children a pattern expected, phrased for humans.
///
/// | range                     | phrase               |
/// |---------------------------|----------------------|
/// | `min == max`              | `{min}`              |
/// | `max` unbounded           | `at least {min}`     |
/// | `min == 0`, `max` bounded | `at most {max}`      |
/// | otherwise                 | `between [{min}, {max}]` |
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Quantifier {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Between(usize, usize),
}

impl Quantifier {
    /// Pick the phrase for a `min..=max` range (`None` = unbounded).
    pub fn for_bounds(min: usize, max: Option<usize>) -> Self {
        match max {
            Some(max) if max == min => Quantifier::Exactly(min),
            None => Quantifier::AtLeast(min),
            Some(max) if min == 0 => Quantifier::AtMost(max),
            Some(max) => Quantifier::Between(min, max),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Exactly(n) => write!(f, "{n}"),
            Quantifier::AtLeast(n) => write!(f, "at least {n}"),
            Quantifier::AtMost(n) => write!(f, "at most {n}"),
            Quantifier::Between(lo, hi) => write!(f, "between [{lo}, {hi}]"),
        }
    }
}

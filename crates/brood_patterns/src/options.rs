//! Matcher configuration.

/// Configuration for a match call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MatchOptions {
    /// Raise count and leftover-children violations instead of tolerating them.
    pub strict: bool,
    /// Run pattern mappers over matched children.
    pub apply_mappers: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            strict: false,
            apply_mappers: true,
        }
    }
}

impl MatchOptions {
    /// Options for validation only: strict, mappers skipped.
    pub fn validating() -> Self {
        MatchOptions {
            strict: true,
            apply_mappers: false,
        }
    }

    /// Options for consuming children: lenient, mappers applied.
    pub fn rendering() -> Self {
        MatchOptions::default()
    }

    /// Strict matching with mappers applied.
    pub fn strict() -> Self {
        MatchOptions {
            strict: true,
            apply_mappers: true,
        }
    }
}

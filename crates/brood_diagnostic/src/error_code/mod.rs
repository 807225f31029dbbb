//! Error codes for matcher and pattern diagnostics.
//!
//! Format: M#### where the second digit indicates the source:
//! - M00xx: child matching errors
//! - M01xx: pattern declaration errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A pattern matched fewer (or more) children than its range allows
    M0001,
    /// Children remain after every pattern has run
    M0002,
    /// A pattern accepts no shapes
    M0101,
    /// A pattern's minimum exceeds its maximum
    M0102,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "M0001",
            ErrorCode::M0002 => "M0002",
            ErrorCode::M0101 => "M0101",
            ErrorCode::M0102 => "M0102",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "child count outside the pattern's range",
            ErrorCode::M0002 => "unmatched children after the last pattern",
            ErrorCode::M0101 => "pattern accepts no shapes",
            ErrorCode::M0102 => "pattern minimum exceeds its maximum",
        }
    }

    /// Whether the code is raised while matching, as opposed to while
    /// declaring patterns.
    pub fn is_match_error(&self) -> bool {
        matches!(self, ErrorCode::M0001 | ErrorCode::M0002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

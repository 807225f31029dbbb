//! Error reporting for child-shape matching.
//!
//! Messages produced here are a contract: hosts surface them to users and
//! tests compare them verbatim. The wording is therefore kept in one place:
//! - `Quantifier` turns a `(min, max)` range into its phrase
//! - `render` prints shape lists and offending nodes
//! - `MatchError` assembles the two message grammars
//!
//! ```text
//! Too few children of type E2 for <Wrapper1 />. Expected 1, Received: 0.
//! Too many children passed to <Owner />. Matched 2 of 3.
//! ```

mod error_code;
mod errors;
mod quantifier;
pub mod render;

pub use error_code::ErrorCode;
pub use errors::{CountDirection, CountMismatch, MatchError, PatternError, UnmatchedChildren};
pub use quantifier::Quantifier;

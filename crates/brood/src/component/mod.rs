//! Host-side glue: components that declare the shape of their children.

use brood_diagnostic::MatchError;
use brood_node::{ChildNode, ComponentId, Props};
use brood_patterns::{MatchOptions, MatchResult, Matcher, PatternList};

/// A parent component with declared child patterns.
///
/// Implementors supply their identity, patterns, props and children; the
/// provided methods run the matcher with the right options:
///
/// | method              | strict | mappers |
/// |---------------------|--------|---------|
/// | `validate_children` | yes    | no      |
/// | `check_children`    | yes    | no      |
/// | `match_children`    | no     | yes     |
/// | `match_child`       | no     | yes     |
pub trait Component {
    fn identity(&self) -> &ComponentId;

    fn child_patterns(&self) -> &PatternList;

    /// Props handed to mappers as context.
    fn props(&self) -> &Props;

    fn children(&self) -> &[ChildNode];

    /// Check the children against the declared patterns.
    ///
    /// Returns the first violation; mappers are not run.
    fn validate_children(&self) -> Result<(), MatchError> {
        Matcher::new(
            self.children(),
            self.child_patterns(),
            self.identity().display_name(),
        )
        .with_options(MatchOptions::validating())
        .with_context(self.props())
        .match_all()
        .map(|_| ())
    }

    /// Like [`Component::validate_children`], but also reports a failure as
    /// a prop-type warning through `tracing`.
    fn check_children(&self) -> Result<(), MatchError> {
        self.validate_children().inspect_err(|err| {
            tracing::warn!(
                code = %err.code(),
                "{}",
                prop_type_warning(err, self.identity().display_name())
            );
        })
    }

    /// One result per pattern, mapped, best effort.
    fn match_children(&self) -> Vec<MatchResult> {
        Matcher::new(
            self.children(),
            self.child_patterns(),
            self.identity().display_name(),
        )
        .with_options(MatchOptions::rendering())
        .with_context(self.props())
        .match_partial()
    }

    /// The first pattern's result, for components with a single pattern.
    fn match_child(&self) -> Option<MatchResult> {
        self.match_children().into_iter().next()
    }
}

/// Phrase a match failure the way hosts report failed prop types.
pub fn prop_type_warning(err: &MatchError, owner: &str) -> String {
    format!("Warning: Failed prop type: {err}\n    in {owner}")
}

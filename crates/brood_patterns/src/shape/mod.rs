//! Shape specifiers and their resolution against a single node.
//!
//! A specifier is classified once, when it is built: a plain string is a
//! tag, a `ComponentId` is an identity, and anything else must be wrapped
//! explicitly as a predicate. Matching never re-infers the kind.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use brood_node::{ChildNode, ComponentId, ShapeTag};

type PredicateFn = dyn Fn(&ChildNode) -> bool + Send + Sync;

/// A named boolean test over a node.
///
/// The name is what error messages print for this shape.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    test: Arc<PredicateFn>,
}

impl Predicate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, node: &ChildNode) -> bool {
        (self.test)(node)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.name)
    }
}

/// One accepted shape within a pattern.
#[derive(Clone, Debug)]
pub enum ShapeSpec {
    /// Matches nodes tagged with exactly this string.
    Tag(String),
    /// Matches instances of this component, compared by identity.
    Component(ComponentId),
    /// Matches nodes the predicate accepts.
    Predicate(Predicate),
}

impl ShapeSpec {
    pub fn tag(name: impl Into<String>) -> Self {
        ShapeSpec::Tag(name.into())
    }

    pub fn component(id: &ComponentId) -> Self {
        ShapeSpec::Component(id.clone())
    }

    /// A predicate named after its closure type.
    ///
    /// Prefer [`ShapeSpec::named_predicate`] when the shape shows up in
    /// user-facing errors.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&ChildNode) -> bool + Send + Sync + 'static,
    {
        ShapeSpec::Predicate(Predicate {
            name: Cow::Borrowed(std::any::type_name::<F>()),
            test: Arc::new(test),
        })
    }

    pub fn named_predicate<F>(name: impl Into<Cow<'static, str>>, test: F) -> Self
    where
        F: Fn(&ChildNode) -> bool + Send + Sync + 'static,
    {
        ShapeSpec::Predicate(Predicate {
            name: name.into(),
            test: Arc::new(test),
        })
    }

    /// Matches any node carrying the property `key`.
    pub fn has_prop(key: impl Into<String>) -> Self {
        let key = key.into();
        let name = format!("has_prop({key})");
        ShapeSpec::named_predicate(name, move |node: &ChildNode| node.props().contains(&key))
    }

    /// Whether `node` has this shape.
    pub fn matches(&self, node: &ChildNode) -> bool {
        match (self, node.shape()) {
            (ShapeSpec::Tag(expected), ShapeTag::Tag(actual)) => expected == actual,
            (ShapeSpec::Component(expected), ShapeTag::Component(actual)) => expected == actual,
            (ShapeSpec::Predicate(predicate), _) => predicate.test(node),
            _ => false,
        }
    }

    /// Name printed for this shape in error messages.
    pub fn name(&self) -> &str {
        match self {
            ShapeSpec::Tag(tag) => tag,
            ShapeSpec::Component(id) => id.display_name(),
            ShapeSpec::Predicate(predicate) => predicate.name(),
        }
    }
}

impl From<&str> for ShapeSpec {
    fn from(tag: &str) -> Self {
        ShapeSpec::tag(tag)
    }
}

impl From<String> for ShapeSpec {
    fn from(tag: String) -> Self {
        ShapeSpec::Tag(tag)
    }
}

impl From<&ComponentId> for ShapeSpec {
    fn from(id: &ComponentId) -> Self {
        ShapeSpec::component(id)
    }
}

impl From<ComponentId> for ShapeSpec {
    fn from(id: ComponentId) -> Self {
        ShapeSpec::Component(id)
    }
}

/// Whether any of `shapes` accepts `node`.
pub fn any_matches(shapes: &[ShapeSpec], node: &ChildNode) -> bool {
    shapes.iter().any(|shape| shape.matches(node))
}

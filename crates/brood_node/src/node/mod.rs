//! Child nodes as handed over by the host.

use std::fmt;
use std::sync::Arc;

use crate::{ComponentId, PropValue, Props};

/// Discriminator naming what kind of node a child is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    /// A primitive markup tag such as `div`.
    Tag(String),
    /// An instance of a component class.
    Component(ComponentId),
    /// The host could not say what the node is (text, fragments, ...).
    Unspecified,
}

#[derive(Debug, PartialEq)]
struct NodeData {
    shape: ShapeTag,
    props: Props,
}

/// An immutable child node.
///
/// Cloning is cheap and preserves identity; see [`ChildNode::ptr_eq`].
/// Equality is structural: two separately built `<E1 />` nodes compare equal.
#[derive(Clone)]
pub struct ChildNode(Arc<NodeData>);

impl ChildNode {
    pub fn new(shape: ShapeTag, props: Props) -> Self {
        ChildNode(Arc::new(NodeData { shape, props }))
    }

    /// A primitive markup node with no properties.
    pub fn tag(name: impl Into<String>) -> Self {
        ChildNode::new(ShapeTag::Tag(name.into()), Props::new())
    }

    /// A component instance with no properties.
    pub fn component(id: &ComponentId) -> Self {
        ChildNode::new(ShapeTag::Component(id.clone()), Props::new())
    }

    /// A node of unknown shape.
    pub fn unspecified(props: Props) -> Self {
        ChildNode::new(ShapeTag::Unspecified, props)
    }

    pub fn shape(&self) -> &ShapeTag {
        &self.0.shape
    }

    pub fn props(&self) -> &Props {
        &self.0.props
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.0.props.get(key)
    }

    /// Return a copy of this node with `key` set to `value`.
    ///
    /// The receiver is left untouched; this is the only way to "change" a node.
    #[must_use]
    pub fn with_prop(&self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        let mut props = self.0.props.clone();
        props.insert(key, value);
        ChildNode::new(self.0.shape.clone(), props)
    }

    /// Name used when printing the node: the tag, the component's display
    /// name, or `unknown`.
    pub fn display_name(&self) -> &str {
        match &self.0.shape {
            ShapeTag::Tag(tag) => tag,
            ShapeTag::Component(id) => id.display_name(),
            ShapeTag::Unspecified => "unknown",
        }
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(a: &ChildNode, b: &ChildNode) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for ChildNode {
    fn eq(&self, other: &Self) -> bool {
        ChildNode::ptr_eq(self, other) || self.0 == other.0
    }
}

impl fmt::Debug for ChildNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple(self.display_name());
        for (key, value) in self.0.props.iter() {
            tuple.field(&format_args!("{key}={value:?}"));
        }
        tuple.finish()
    }
}

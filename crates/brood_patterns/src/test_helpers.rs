//! Fixture components and nodes shared by the unit tests.

use brood_node::{ChildNode, ComponentId, Props, ShapeTag};

use crate::ShapeSpec;

/// The four fixture components plus the owning parent.
pub struct Fixture {
    pub e1: ComponentId,
    pub e2: ComponentId,
    pub e3: ComponentId,
    pub e4: ComponentId,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            e1: ComponentId::new("E1"),
            e2: ComponentId::new("E2"),
            e3: ComponentId::new("E3"),
            e4: ComponentId::new("E4"),
        }
    }

    pub fn e1(&self) -> ChildNode {
        ChildNode::component(&self.e1)
    }

    pub fn e2(&self) -> ChildNode {
        ChildNode::component(&self.e2)
    }

    pub fn e4(&self) -> ChildNode {
        ChildNode::component(&self.e4)
    }

    /// An `<E3 rand={rand} />` node.
    pub fn e3(&self, rand: i64) -> ChildNode {
        ChildNode::new(
            ShapeTag::Component(self.e3.clone()),
            Props::new().with("rand", rand),
        )
    }
}

pub const OWNER: &str = "ParentComponent";

/// Matches any node carrying a `rand` property.
pub fn has_rand() -> ShapeSpec {
    ShapeSpec::named_predicate("has_rand", |node: &ChildNode| node.props().contains("rand"))
}

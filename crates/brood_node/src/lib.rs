//! Brood Node - data model for child-shape matching.
//!
//! This crate provides the values the matcher reads but never owns:
//! - `ComponentId`: a component identity with a display name
//! - `ShapeTag`: what kind of node a child is
//! - `Props` / `PropValue`: the ordered property bag carried by every node
//! - `ChildNode`: a shared, immutable child handed over by the host
//!
//! # Ownership
//!
//! Nodes are created by the host and are immutable from the matcher's point
//! of view. `ChildNode` is a thin `Arc` handle, so passing a node through the
//! matcher keeps its identity (`ChildNode::ptr_eq`), while transforms such as
//! `ChildNode::with_prop` always allocate a new node.

mod component;
mod node;
mod props;

pub use component::ComponentId;
pub use node::{ChildNode, ShapeTag};
pub use props::{PropValue, Props};

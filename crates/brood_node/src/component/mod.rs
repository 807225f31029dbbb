//! Component identities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct ComponentInfo {
    display_name: String,
}

/// Identity of a component class.
///
/// Two identities are equal only if they come from the same `ComponentId::new`
/// call (clones share the allocation). Display names are for error text and
/// take no part in equality, so two distinct components may share a name.
#[derive(Clone)]
pub struct ComponentId(Arc<ComponentInfo>);

impl ComponentId {
    /// Create a fresh identity.
    pub fn new(display_name: impl Into<String>) -> Self {
        ComponentId(Arc::new(ComponentInfo {
            display_name: display_name.into(),
        }))
    }

    pub fn display_name(&self) -> &str {
        &self.0.display_name
    }
}

impl PartialEq for ComponentId {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ComponentId {}

impl Hash for ComponentId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.display_name())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

//! Capability registry: insertion-ordered store of all constructed capabilities.
//!
//! Registration is append-only and total: every capability appears exactly
//! once, in registration order, and never unregisters. The planner uses the
//! registry as its search space; registration order is the final planning
//! tie-breaker, which keeps plans reproducible.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// Identity of a registered capability: its dense registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(usize);

impl CapabilityId {
    /// Position in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered collection of registered capabilities.
#[derive(Default)]
pub struct CapabilityRegistry {
    capabilities: Vec<Box<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a capability. O(1), no de-duplication; duplicates by distinct
    /// identity are allowed.
    pub fn register(&mut self, capability: Box<dyn Capability>) -> CapabilityId {
        let id = CapabilityId(self.capabilities.len());
        self.capabilities.push(capability);
        id
    }

    /// Look up a capability by id.
    pub fn get(&self, id: CapabilityId) -> Option<&dyn Capability> {
        self.capabilities.get(id.0).map(|c| c.as_ref())
    }

    /// Look up a capability by id, mutably (needed to run its behavior).
    pub fn get_mut(&mut self, id: CapabilityId) -> Option<&mut Box<dyn Capability>> {
        self.capabilities.get_mut(id.0)
    }

    /// Iterate over all capabilities in registration order.
    pub fn all(&self) -> impl Iterator<Item = (CapabilityId, &dyn Capability)> {
        self.capabilities
            .iter()
            .enumerate()
            .map(|(i, c)| (CapabilityId(i), c.as_ref()))
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether no capabilities are registered.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Clear the registry.
    pub fn reset(&mut self) {
        self.capabilities.clear();
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field(
                "capabilities",
                &self.capabilities.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::BehaviorContext;
    use crate::condition::Conditions;

    struct Named {
        name: &'static str,
        empty: Conditions,
    }

    impl Named {
        fn boxed(name: &'static str) -> Box<dyn Capability> {
            Box::new(Self {
                name,
                empty: Conditions::new(),
            })
        }
    }

    impl Capability for Named {
        fn name(&self) -> &str {
            self.name
        }
        fn preconditions(&self) -> &Conditions {
            &self.empty
        }
        fn effects(&self) -> &Conditions {
            &self.empty
        }
        fn behavior(&mut self, _ctx: &mut BehaviorContext<'_>) {}
    }

    #[test]
    fn registration_preserves_order() {
        let mut reg = CapabilityRegistry::new();
        reg.register(Named::boxed("a"));
        reg.register(Named::boxed("b"));
        reg.register(Named::boxed("c"));

        let names: Vec<&str> = reg.all().map(|(_, c)| c.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn register_returns_dense_ids() {
        let mut reg = CapabilityRegistry::new();
        let a = reg.register(Named::boxed("a"));
        let b = reg.register(Named::boxed("b"));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(reg.get(a).map(|c| c.name()), Some("a"));
        assert_eq!(reg.get(b).map(|c| c.name()), Some("b"));
    }

    #[test]
    fn duplicates_by_distinct_identity() {
        let mut reg = CapabilityRegistry::new();
        let first = reg.register(Named::boxed("same"));
        let second = reg.register(Named::boxed("same"));

        assert_ne!(first, second);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn reset_clears() {
        let mut reg = CapabilityRegistry::new();
        let id = reg.register(Named::boxed("a"));
        assert!(!reg.is_empty());

        reg.reset();
        assert!(reg.is_empty());
        assert!(reg.get(id).is_none());
    }
}

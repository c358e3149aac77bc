//! The environment: world, capability registry, and diary as one unit.
//!
//! These three are deliberately not process-wide singletons: an
//! [`Environment`] is an explicitly constructed value passed by reference to
//! the planner and executor, so tests build a fresh environment per case
//! instead of resetting shared global state. A concurrent host must
//! serialize access externally; there is no internal locking.

use crate::capability::Capability;
use crate::diary::Diary;
use crate::registry::{CapabilityId, CapabilityRegistry};
use crate::world::World;

/// Shared mutable state of one planning/execution agent.
#[derive(Debug, Default)]
pub struct Environment {
    /// The condition map all capabilities read and mutate.
    pub world: World,
    /// Every constructed capability, in registration order.
    pub registry: CapabilityRegistry,
    /// Append-only journal of executor iterations.
    pub diary: Diary,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability into this environment's registry.
    pub fn register(&mut self, capability: Box<dyn Capability>) -> CapabilityId {
        self.registry.register(capability)
    }

    /// Reset the whole environment: world, registry, and diary together.
    /// This is deliberately a single operation so test runs stay hermetic.
    /// Must not be invoked while an executor iteration is in flight.
    pub fn reset(&mut self) {
        self.world.reset();
        self.registry.reset();
        self.diary.reset();
    }
}

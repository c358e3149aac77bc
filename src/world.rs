//! The world model: the single source of truth for what is currently known.
//!
//! The [`World`] owns a live [`Conditions`] map. External observers (sensor
//! feeds, hosts) may read and patch it between executor iterations; the
//! executor patches it after every executed action. Snapshots are clones —
//! a taken snapshot never reflects later mutation.

use crate::condition::Conditions;

/// The mutable mapping of named boolean conditions.
#[derive(Debug, Clone, Default)]
pub struct World {
    facts: Conditions,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// A point-in-time copy of the world's conditions.
    pub fn snapshot(&self) -> Conditions {
        self.facts.clone()
    }

    /// Borrow the live conditions for reading.
    pub fn facts(&self) -> &Conditions {
        &self.facts
    }

    /// Merge `patch` into the world: new keys added, existing keys
    /// overwritten, never a full replacement. Accepts any keys and values;
    /// there are no error conditions.
    pub fn update(&mut self, patch: &Conditions) {
        self.facts.merge(patch);
    }

    /// Whether the world currently satisfies every entry of `goal`.
    pub fn satisfies(&self, goal: &Conditions) -> bool {
        goal.satisfied_by(&self.facts)
    }

    /// Clear the world to an empty mapping.
    ///
    /// Resetting the whole environment (world, registry, and diary together)
    /// is [`Environment::reset`](crate::environment::Environment::reset).
    pub fn reset(&mut self) {
        self.facts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_merges() {
        let mut world = World::new();
        world.update(&Conditions::new().with("a", true));
        world.update(&Conditions::new().with("b", false));

        assert_eq!(world.facts().len(), 2);
        assert!(world.satisfies(&Conditions::new().with("a", true)));
    }

    #[test]
    fn update_is_idempotent() {
        let patch = Conditions::new().with("a", true).with("b", false);

        let mut once = World::new();
        once.update(&patch);
        let mut twice = World::new();
        twice.update(&patch);
        twice.update(&patch);

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut world = World::new();
        world.update(&Conditions::new().with("a", true));

        let before = world.snapshot();
        world.update(&Conditions::new().with("a", false).with("b", true));

        assert_eq!(before.get(&"a".into()), Some(true));
        assert_eq!(before.get(&"b".into()), None);
        assert_eq!(world.facts().get(&"a".into()), Some(false));
    }

    #[test]
    fn reset_clears() {
        let mut world = World::new();
        world.update(&Conditions::new().with("a", true));
        world.reset();

        assert!(world.facts().is_empty());
        assert!(!world.satisfies(&Conditions::new().with("a", true)));
    }
}

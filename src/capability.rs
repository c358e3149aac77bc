//! Capabilities: units of behavior with declared preconditions and effects.
//!
//! Each capability implements the [`Capability`] trait. Supplying a custom
//! `behavior` is a trait obligation, so a capability type without one does
//! not compile and can never reach the registry — there is no such thing as
//! a silent no-op capability.

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, Conditions};
use crate::world::World;

/// Outcome of executing a capability.
///
/// Determined after execution by comparing declared effects against the
/// effect values actually applied, not merely by "did the behavior run".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    /// Every declared effect was delivered as declared.
    Success,
    /// At least one declared effect was overridden during execution,
    /// or no plan could be produced at all.
    Fail,
}

/// Execution context handed to a capability's behavior.
///
/// The behavior reads the world through the context and may override declared
/// effect keys before they are merged. An override that contradicts the
/// declared value is how a capability reports that it could not deliver an
/// effect, and yields [`ActionStatus::Fail`].
pub struct BehaviorContext<'a> {
    world: &'a Conditions,
    overrides: Conditions,
}

impl BehaviorContext<'_> {
    /// The world as it stands when the behavior runs.
    pub fn world(&self) -> &Conditions {
        self.world
    }

    /// Override one declared effect key for this execution only. The declared
    /// effects themselves are never mutated.
    pub fn override_effect(&mut self, condition: impl Into<Condition>, value: bool) {
        self.overrides.set(condition, value);
    }
}

/// A unit of behavior the planner can schedule.
///
/// `preconditions` and `effects` are fixed for the life of the capability;
/// the planner only inspects them. `behavior` is the authoring contract:
/// synchronous, non-blocking relative to the planner, and any I/O it performs
/// completes before [`act`] returns.
pub trait Capability {
    /// Human-readable name, recorded in plans and the diary.
    fn name(&self) -> &str;

    /// Conditions that must hold for this capability to be directly usable
    /// as a plan step.
    fn preconditions(&self) -> &Conditions;

    /// Conditions guaranteed if execution succeeds.
    fn effects(&self) -> &Conditions;

    /// The capability's custom behavior, run by [`act`] before effects are
    /// merged into the world.
    fn behavior(&mut self, ctx: &mut BehaviorContext<'_>);
}

/// Execute a capability against the world.
///
/// Runs `behavior`, merges the declared effects (subject to any overrides the
/// behavior recorded) into the world unconditionally, and reports
/// [`ActionStatus::Success`] iff every declared effect key carried its
/// declared value into the merge.
pub fn act(capability: &mut dyn Capability, world: &mut World) -> ActionStatus {
    let mut ctx = BehaviorContext {
        world: world.facts(),
        overrides: Conditions::new(),
    };
    capability.behavior(&mut ctx);
    let overrides = ctx.overrides;

    let mut applied = capability.effects().clone();
    applied.merge(&overrides);
    world.update(&applied);

    let status = if capability.effects().satisfied_by(&applied) {
        ActionStatus::Success
    } else {
        ActionStatus::Fail
    };
    tracing::debug!(capability = capability.name(), ?status, "acted");
    status
}

//! Goal-regression planner: search the registry for an ordered action sequence.
//!
//! The planner treats the goal as a target condition set. Each unsatisfied
//! goal condition is resolved by selecting a capability whose effects produce
//! it; unmet preconditions of that capability become sub-goals planned first,
//! so sub-steps land before the step that needs them. Selection is
//! deterministic: fewest unmet preconditions wins, registration order breaks
//! remaining ties.
//!
//! Once accepted, a step is final — the planner never backtracks across
//! accepted steps. A dead-end sub-goal therefore fails the whole planning
//! call and no plan is produced.

use serde::Serialize;

use crate::condition::{Condition, Conditions};
use crate::error::{PlanError, PlanResult};
use crate::registry::{CapabilityId, CapabilityRegistry};

/// One step of a plan: a reference to exactly one registered capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Which capability to execute.
    pub capability: CapabilityId,
    /// The capability's name at planning time, for journaling.
    pub name: String,
}

/// An ordered sequence of plan steps; ordering is execution order.
///
/// A plan is valid with respect to a world snapshot iff applying each step's
/// effects in order, starting from that snapshot, yields a superset match of
/// the goal. An empty plan means the goal was already satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Steps in execution order.
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Produce a plan achieving `goal` from the world `snapshot` using the
/// capabilities in `registry`.
///
/// Returns an empty plan when the snapshot already satisfies the goal, and a
/// [`PlanError`] when some goal condition has no producer or resolving a
/// precondition would cycle.
pub fn plan(
    goal: &Conditions,
    snapshot: &Conditions,
    registry: &CapabilityRegistry,
) -> PlanResult<Plan> {
    let mut projected = snapshot.clone();
    let mut steps = Vec::new();
    let mut stack = Vec::new();

    for (condition, required) in goal.iter() {
        solve(
            condition,
            required,
            registry,
            &mut projected,
            &mut steps,
            &mut stack,
        )?;
    }

    Ok(Plan { steps })
}

/// Resolve one condition against the projected world, appending any needed
/// steps in dependency order.
///
/// `projected` is the snapshot plus the effects of every step accepted so
/// far, so a capability already accepted for an earlier condition is never
/// duplicated: its effects make later conditions it covers come back
/// satisfied. `stack` holds the capabilities currently being regressed
/// through; selecting one of them again would make it its own transitive
/// precondition-satisfier, which is the cycle the guard rejects.
fn solve(
    condition: &Condition,
    required: bool,
    registry: &CapabilityRegistry,
    projected: &mut Conditions,
    steps: &mut Vec<PlanStep>,
    stack: &mut Vec<CapabilityId>,
) -> PlanResult<()> {
    if projected.contains(condition, required) {
        return Ok(());
    }

    // Rank providers: fewest unmet preconditions first, then registration
    // order (strict `<` keeps the earliest registrant on ties).
    let mut providers = 0usize;
    let mut best: Option<(usize, CapabilityId, &dyn crate::capability::Capability)> = None;
    for (id, cap) in registry.all() {
        if !cap.effects().contains(condition, required) {
            continue;
        }
        providers += 1;
        if stack.contains(&id) {
            continue;
        }
        let unmet = cap.preconditions().unmet_in(projected).len();
        if best.is_none_or(|(best_unmet, _, _)| unmet < best_unmet) {
            best = Some((unmet, id, cap));
        }
    }

    let Some((_, chosen, capability)) = best else {
        return Err(if providers > 0 {
            PlanError::PreconditionCycle {
                condition: condition.clone(),
            }
        } else {
            PlanError::NoSatisfier {
                condition: condition.clone(),
                required,
            }
        });
    };
    tracing::debug!(
        condition = %condition,
        required,
        capability = capability.name(),
        "selected provider"
    );

    stack.push(chosen);
    let unmet: Vec<(Condition, bool)> = capability
        .preconditions()
        .unmet_in(projected)
        .into_iter()
        .map(|(c, v)| (c.clone(), v))
        .collect();
    for (precondition, value) in &unmet {
        solve(precondition, *value, registry, projected, steps, stack)?;
    }
    stack.pop();

    steps.push(PlanStep {
        capability: chosen,
        name: capability.name().to_string(),
    });
    projected.merge(capability.effects());
    Ok(())
}

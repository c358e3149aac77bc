//! The executor: a bounded plan/execute/record loop over an environment.
//!
//! Each iteration cycles Idle → Planning → Executing → Recorded: snapshot the
//! world, plan toward the configured goal, run the plan's capabilities in
//! order (later steps see earlier steps' effects), and append a diary entry.
//! A failed planning attempt is a recorded outcome, never a process failure.
//! The loop terminates when the iteration budget is exhausted.

use crate::capability::{self, ActionStatus};
use crate::condition::Conditions;
use crate::config::ExecutorConfig;
use crate::diary::{DiaryEntry, PlanStepRecord};
use crate::environment::Environment;
use crate::planner;

/// Where the executor is inside its iteration cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// Between iterations.
    Idle,
    /// Producing a plan from the current world snapshot.
    Planning,
    /// Running plan steps.
    Executing,
    /// Appending the iteration's diary entry.
    Recorded,
}

/// The agent loop: plans and executes toward one goal for a fixed number of
/// iterations.
#[derive(Debug)]
pub struct Executor {
    goal: Conditions,
    remaining: u32,
    state: ExecutorState,
}

impl Executor {
    /// Create an executor with a goal and an iteration budget (the number of
    /// plan/execute cycles to run).
    pub fn new(goal: Conditions, lifespan: u32) -> Self {
        Self {
            goal,
            remaining: lifespan,
            state: ExecutorState::Idle,
        }
    }

    /// Build an executor from a loaded [`ExecutorConfig`].
    pub fn from_config(config: ExecutorConfig) -> Self {
        Self::new(config.goal, config.lifespan)
    }

    /// The goal this executor plans toward.
    pub fn goal(&self) -> &Conditions {
        &self.goal
    }

    /// Current loop state.
    pub fn state(&self) -> ExecutorState {
        self.state
    }

    /// Iterations left in the budget.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the iteration budget is spent.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Run iterations until the budget is exhausted.
    pub fn run(&mut self, env: &mut Environment) {
        while !self.is_exhausted() {
            self.cycle(env);
        }
    }

    /// Run a single iteration: snapshot, plan, execute, record. Does nothing
    /// once the budget is exhausted.
    pub fn cycle(&mut self, env: &mut Environment) {
        if self.is_exhausted() {
            return;
        }

        self.state = ExecutorState::Planning;
        let world_before = env.world.snapshot();
        let planned = planner::plan(&self.goal, &world_before, &env.registry);

        self.state = ExecutorState::Executing;
        let (records, status) = match planned {
            Ok(plan) => {
                // Empty plan on an already-satisfied goal counts as success.
                let mut status = ActionStatus::Success;
                let mut records = Vec::with_capacity(plan.len());
                for step in &plan.steps {
                    if let Some(cap) = env.registry.get_mut(step.capability) {
                        let step_status = capability::act(cap.as_mut(), &mut env.world);
                        records.push(PlanStepRecord {
                            capability: step.capability,
                            name: step.name.clone(),
                            status: step_status,
                        });
                        // The iteration carries the last executed step's
                        // status; a mid-plan failure does not abort the
                        // remaining steps.
                        status = step_status;
                    }
                }
                (records, status)
            }
            Err(error) => {
                tracing::debug!(%error, "planning failed, recording FAIL entry");
                (Vec::new(), ActionStatus::Fail)
            }
        };

        self.state = ExecutorState::Recorded;
        env.diary.append(DiaryEntry {
            goal: self.goal.clone(),
            plan: records,
            world_before,
            world_after: env.world.snapshot(),
            status,
        });

        self.remaining -= 1;
        self.state = ExecutorState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{BehaviorContext, Capability};

    struct Cap {
        name: &'static str,
        preconditions: Conditions,
        effects: Conditions,
    }

    impl Cap {
        fn boxed(
            name: &'static str,
            preconditions: Conditions,
            effects: Conditions,
        ) -> Box<dyn Capability> {
            Box::new(Self {
                name,
                preconditions,
                effects,
            })
        }
    }

    impl Capability for Cap {
        fn name(&self) -> &str {
            self.name
        }
        fn preconditions(&self) -> &Conditions {
            &self.preconditions
        }
        fn effects(&self) -> &Conditions {
            &self.effects
        }
        fn behavior(&mut self, _ctx: &mut BehaviorContext<'_>) {}
    }

    #[test]
    fn one_iteration_records_one_entry() {
        let mut env = Environment::new();
        env.register(Cap::boxed(
            "monitor",
            Conditions::new().with("is_monitored", false),
            Conditions::new().with("is_monitored", true),
        ));
        env.world.update(&Conditions::new().with("is_monitored", false));

        let mut executor = Executor::new(Conditions::new().with("is_monitored", true), 1);
        executor.run(&mut env);

        assert!(executor.is_exhausted());
        assert_eq!(executor.state(), ExecutorState::Idle);
        assert_eq!(env.diary.len(), 1);
        let entry = &env.diary.entries()[0];
        assert_eq!(entry.status, ActionStatus::Success);
        assert_eq!(entry.plan.len(), 1);
        assert_eq!(entry.world_after.get(&"is_monitored".into()), Some(true));
    }

    #[test]
    fn satisfied_goal_records_success_with_empty_plan() {
        let mut env = Environment::new();
        env.world.update(&Conditions::new().with("is_monitored", true));

        let mut executor = Executor::new(Conditions::new().with("is_monitored", true), 1);
        executor.run(&mut env);

        let entry = &env.diary.entries()[0];
        assert_eq!(entry.status, ActionStatus::Success);
        assert!(entry.plan.is_empty());
    }

    #[test]
    fn unplannable_goal_records_fail_and_keeps_running() {
        let mut env = Environment::new();
        let mut executor = Executor::new(Conditions::new().with("impossible", true), 3);
        executor.run(&mut env);

        assert_eq!(env.diary.len(), 3);
        for entry in env.diary.entries() {
            assert_eq!(entry.status, ActionStatus::Fail);
            assert!(entry.plan.is_empty());
        }
    }

    #[test]
    fn lifespan_bounds_the_loop() {
        let mut env = Environment::new();
        env.world.update(&Conditions::new().with("done", true));
        let mut executor = Executor::new(Conditions::new().with("done", true), 5);

        executor.run(&mut env);
        assert_eq!(env.diary.len(), 5);

        // Further cycles are no-ops.
        executor.cycle(&mut env);
        assert_eq!(env.diary.len(), 5);
    }

    #[test]
    fn later_steps_see_earlier_effects() {
        let mut env = Environment::new();
        struct Gated {
            preconditions: Conditions,
            effects: Conditions,
        }
        impl Capability for Gated {
            fn name(&self) -> &str {
                "gated"
            }
            fn preconditions(&self) -> &Conditions {
                &self.preconditions
            }
            fn effects(&self) -> &Conditions {
                &self.effects
            }
            fn behavior(&mut self, ctx: &mut BehaviorContext<'_>) {
                // Fails unless the preparing step already ran.
                if !ctx.world().contains(&"ready".into(), true) {
                    ctx.override_effect("done", false);
                }
            }
        }

        env.register(Cap::boxed(
            "prepare",
            Conditions::new(),
            Conditions::new().with("ready", true),
        ));
        let gated = env.register(Box::new(Gated {
            preconditions: Conditions::new().with("ready", true),
            effects: Conditions::new().with("done", true),
        }));

        let mut executor = Executor::new(Conditions::new().with("done", true), 1);
        executor.run(&mut env);

        let entry = &env.diary.entries()[0];
        assert_eq!(entry.status, ActionStatus::Success);
        assert_eq!(entry.plan.len(), 2);
        assert_eq!(entry.plan[1].capability, gated);
        assert_eq!(entry.world_before.get(&"ready".into()), None);
        assert_eq!(entry.world_after.get(&"done".into()), Some(true));
    }
}

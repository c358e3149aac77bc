//! # headway
//!
//! A goal-oriented action planning (GOAP) engine for autonomous control
//! agents. Given a mutable [`World`] of named boolean conditions, a
//! [`CapabilityRegistry`] of actions with declared preconditions and effects,
//! and a goal, the engine plans and executes an action sequence that carries
//! the world to a goal-satisfying state, journaling every iteration in an
//! append-only [`Diary`].
//!
//! ## Architecture
//!
//! - **World** (`world`): condition-name → bool map, the single source of truth
//! - **Capabilities** (`capability`, `registry`): trait-based actions with
//!   fixed preconditions/effects, registered in insertion order
//! - **Planner** (`planner`): goal-regression search with deterministic
//!   tie-breaking, a cycle guard, and no backtracking across accepted steps
//! - **Executor** (`executor`): bounded Idle → Planning → Executing → Recorded
//!   loop; planning failures are diary entries, never process failures
//! - **Environment** (`environment`): world + registry + diary as one
//!   explicitly constructed unit, reset together for hermetic tests
//!
//! ## Library usage
//!
//! ```
//! use headway::{
//!     ActionStatus, BehaviorContext, Capability, Conditions, Environment, Executor,
//! };
//!
//! struct Monitor {
//!     preconditions: Conditions,
//!     effects: Conditions,
//! }
//!
//! impl Capability for Monitor {
//!     fn name(&self) -> &str {
//!         "monitor"
//!     }
//!     fn preconditions(&self) -> &Conditions {
//!         &self.preconditions
//!     }
//!     fn effects(&self) -> &Conditions {
//!         &self.effects
//!     }
//!     fn behavior(&mut self, _ctx: &mut BehaviorContext<'_>) {
//!         // Read sensors, actuate hardware, ...
//!     }
//! }
//!
//! let mut env = Environment::new();
//! env.register(Box::new(Monitor {
//!     preconditions: Conditions::new().with("is_monitored", false),
//!     effects: Conditions::new().with("is_monitored", true),
//! }));
//! env.world.update(&Conditions::new().with("is_monitored", false));
//!
//! let mut executor = Executor::new(Conditions::new().with("is_monitored", true), 1);
//! executor.run(&mut env);
//!
//! assert_eq!(env.diary.entries()[0].status, ActionStatus::Success);
//! ```

pub mod capability;
pub mod condition;
pub mod config;
pub mod diary;
pub mod environment;
pub mod error;
pub mod executor;
pub mod planner;
pub mod registry;
pub mod world;

pub use capability::{ActionStatus, BehaviorContext, Capability, act};
pub use condition::{Condition, Conditions};
pub use config::ExecutorConfig;
pub use diary::{Diary, DiaryEntry, PlanStepRecord};
pub use environment::Environment;
pub use error::{ConfigError, ConfigResult, PlanError, PlanResult};
pub use executor::{Executor, ExecutorState};
pub use planner::{Plan, PlanStep, plan};
pub use registry::{CapabilityId, CapabilityRegistry};
pub use world::World;

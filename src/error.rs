//! Error types with rich miette diagnostics.
//!
//! Planning failure is data, not control flow: the executor converts a
//! [`PlanError`] into a FAIL diary entry and keeps running. The `Result`
//! surface here exists for callers driving the planner directly and for
//! configuration loading.

use miette::Diagnostic;
use thiserror::Error;

use crate::condition::Condition;

/// Why the planner could not produce a plan.
#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error("no capability produces {condition}={required}")]
    #[diagnostic(
        code(headway::plan::no_satisfier),
        help(
            "Register a capability whose effects set this condition, or drop \
             it from the goal."
        )
    )]
    NoSatisfier {
        condition: Condition,
        required: bool,
    },

    #[error("precondition cycle while planning for {condition}")]
    #[diagnostic(
        code(headway::plan::precondition_cycle),
        help(
            "Capabilities require each other's effects as preconditions. \
             Break the cycle, or seed the world with one of the conditions \
             before planning."
        )
    )]
    PreconditionCycle { condition: Condition },
}

/// Convenience alias for planner operations.
pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Errors loading or saving executor configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    #[diagnostic(
        code(headway::config::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    #[diagnostic(
        code(headway::config::parse),
        help("The file must be TOML with a [goal] table and a lifespan count.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config to {path}")]
    #[diagnostic(code(headway::config::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Condition names and condition sets.
//!
//! A [`Condition`] names one boolean fact about the world ("is_monitored",
//! "door_open"). A [`Conditions`] map is the shared currency of the engine:
//! the world state, goals, capability preconditions, and capability effects
//! are all condition → bool mappings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a single boolean condition.
///
/// Any string is accepted; no schema is enforced. The newtype exists so
/// condition names cannot be confused with other strings at API boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    /// Create a condition name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Condition {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered mapping from condition name to boolean value.
///
/// Backed by a `BTreeMap` so iteration order is the lexicographic order of
/// condition names; plans and diary output derived from a `Conditions` value
/// are therefore deterministic. An absent key means the condition is unknown:
/// checking it is never an error, it is simply not satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conditions(BTreeMap<Condition, bool>);

impl Conditions {
    /// Create an empty condition set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a condition to a value, overwriting any previous value.
    pub fn set(&mut self, condition: impl Into<Condition>, value: bool) {
        self.0.insert(condition.into(), value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, condition: impl Into<Condition>, value: bool) -> Self {
        self.set(condition, value);
        self
    }

    /// Look up a condition. `None` means unknown.
    pub fn get(&self, condition: &Condition) -> Option<bool> {
        self.0.get(condition).copied()
    }

    /// Whether `condition` is known to hold `value`.
    pub fn contains(&self, condition: &Condition, value: bool) -> bool {
        self.get(condition) == Some(value)
    }

    /// Merge `patch` into this set: new keys are added, existing keys are
    /// overwritten, nothing is removed. Merging is idempotent.
    pub fn merge(&mut self, patch: &Conditions) {
        for (condition, value) in patch.iter() {
            self.0.insert(condition.clone(), value);
        }
    }

    /// Whether every entry of `self` appears in `other` with the same value
    /// (superset match). Missing keys count as unsatisfied.
    pub fn satisfied_by(&self, other: &Conditions) -> bool {
        self.iter().all(|(c, v)| other.contains(c, v))
    }

    /// The entries of `self` that `other` does not satisfy.
    pub fn unmet_in<'a>(&'a self, other: &Conditions) -> Vec<(&'a Condition, bool)> {
        self.iter().filter(|(c, v)| !other.contains(c, *v)).collect()
    }

    /// Iterate over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Condition, bool)> {
        self.0.iter().map(|(c, v)| (c, *v))
    }

    /// Number of known conditions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no conditions are known.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove all conditions.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(Condition, bool)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (Condition, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

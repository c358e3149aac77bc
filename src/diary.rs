//! The diary: append-only journal of planning/execution iterations.
//!
//! The diary is the engine's sole observability surface. Every executor
//! iteration appends exactly one [`DiaryEntry`] — including iterations where
//! no plan could be produced — and entries are never mutated afterward.

use serde::Serialize;

use crate::capability::ActionStatus;
use crate::condition::Conditions;
use crate::registry::CapabilityId;

/// One executed (or attempted) plan step, with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStepRecord {
    /// Which capability ran.
    pub capability: CapabilityId,
    /// The capability's name at execution time.
    pub name: String,
    /// Outcome of this step.
    pub status: ActionStatus,
}

/// Immutable record of one executor iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryEntry {
    /// The goal the iteration planned toward.
    pub goal: Conditions,
    /// The executed plan, in execution order. Empty when the goal was
    /// already satisfied or when no plan could be produced.
    pub plan: Vec<PlanStepRecord>,
    /// World snapshot taken before planning.
    pub world_before: Conditions,
    /// World snapshot taken after the last step executed.
    pub world_after: Conditions,
    /// Status of the last executed step; `Success` for an already-satisfied
    /// goal, synthetic `Fail` when planning failed.
    pub status: ActionStatus,
}

/// Ordered, append-only sequence of iteration records.
#[derive(Debug, Clone, Default)]
pub struct Diary {
    entries: Vec<DiaryEntry>,
}

impl Diary {
    /// Create an empty diary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are never removed or rewritten; the diary
    /// grows monotonically until [`reset`](Self::reset).
    pub fn append(&mut self, entry: DiaryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Entry by iteration index.
    pub fn get(&self, index: usize) -> Option<&DiaryEntry> {
        self.entries.get(index)
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the diary. Only meant to be invoked as part of a
    /// whole-environment reset.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Export all entries as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

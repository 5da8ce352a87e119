//! Schedule entry and target types consumed by the execution engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dispatch entry point a schedule entry is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskTarget {
    /// Per-job two-stage pipeline.
    #[serde(rename = "harvest.tasks.run_consumer")]
    RunConsumer,
    /// Monthly archive integrity check.
    #[serde(rename = "harvest.tasks.check_archive")]
    CheckArchive,
    /// Daily archive compaction.
    #[serde(rename = "harvest.tasks.compact_archive")]
    CompactArchive,
}

/// One scheduled invocation rule for the external execution engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Stable identifier, `run_<job>` for manifest-derived entries.
    pub entry_id: String,
    /// Entry point the engine invokes.
    pub target: TaskTarget,
    /// Validated 6-field cron expression (`sec min hour dom month dow`).
    pub cron: String,
    /// Positional arguments passed to the target.
    pub args: Vec<String>,
}

/// Deterministic mapping from entry ID to schedule entry.
pub type Schedule = BTreeMap<String, ScheduleEntry>;

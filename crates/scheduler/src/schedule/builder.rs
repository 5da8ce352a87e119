//! [`build_schedule`] — turns loaded manifests into the full cron schedule.

use tracing::{debug, info};

use crate::error::Result;
use crate::manifest::ManifestStore;

use super::cron::{derive_cron, validate};
use super::entry::{Schedule, ScheduleEntry, TaskTarget};

/// Monthly archive integrity check: day 1 at 23:59 UTC.
const CHECK_ARCHIVE_CRON: &str = "0 59 23 1 * *";

/// Daily archive compaction at 03:00 UTC.
const COMPACT_ARCHIVE_CRON: &str = "0 0 3 * * *";

/// Build the full schedule from the loaded manifests.
///
/// Produces exactly one `run_<name>` entry per manifest, then merges in the
/// two fixed maintenance entries with literal triggers. Every cron
/// expression is validated here so a malformed manifest fails at build time,
/// not at first trigger. Given the same store, the output is identical.
pub fn build_schedule(store: &ManifestStore) -> Result<Schedule> {
    let mut schedule = Schedule::new();

    for (name, manifest) in store.iter() {
        let entry_id = format!("run_{name}");
        let expr = derive_cron(manifest);
        validate(&entry_id, &expr)?;

        debug!(entry_id = %entry_id, cron = %expr, "derived schedule entry");
        schedule.insert(
            entry_id.clone(),
            ScheduleEntry {
                entry_id,
                target: TaskTarget::RunConsumer,
                cron: expr,
                args: vec![name.to_string()],
            },
        );
    }

    for (entry_id, target, expr) in [
        ("check_archive", TaskTarget::CheckArchive, CHECK_ARCHIVE_CRON),
        ("compact_archive", TaskTarget::CompactArchive, COMPACT_ARCHIVE_CRON),
    ] {
        schedule.insert(
            entry_id.to_string(),
            ScheduleEntry {
                entry_id: entry_id.to_string(),
                target,
                cron: expr.to_string(),
                args: Vec::new(),
            },
        );
    }

    info!(entries = schedule.len(), jobs = store.len(), "schedule built");
    Ok(schedule)
}

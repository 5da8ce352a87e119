//! Cron expression derivation and validation helpers.

use std::str::FromStr;

use cron::Schedule as CronSchedule;

use crate::error::{Result, ScheduleError};
use crate::manifest::JobManifest;

/// Derive a 6-field cron expression from a manifest's day/hour/minute fields.
///
/// The `cron` crate requires 6 fields: `sec min hour day-of-month month
/// day-of-week`. Manifests supply minute, hour, and a weekday selector; the
/// seconds field is pinned to 0 and day-of-month/month are wildcards.
pub(crate) fn derive_cron(manifest: &JobManifest) -> String {
    format!(
        "0 {} {} * * {}",
        manifest.minute,
        manifest.hour,
        normalize_days(&manifest.days)
    )
}

/// Normalize a weekday selector for the cron expression.
///
/// Strips all whitespace (manifests often write `"mon, wed, fri"`); ranges,
/// lists, numeric selectors, and `*` pass through unchanged.
pub(crate) fn normalize_days(days: &str) -> String {
    days.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate an expression by parsing it with the `cron` crate.
///
/// Called at schedule-build time so malformed manifest fields fail fast
/// instead of surfacing at first trigger.
pub(crate) fn validate(entry_id: &str, expr: &str) -> Result<()> {
    CronSchedule::from_str(expr)
        .map(|_| ())
        .map_err(|e| ScheduleError::InvalidCronSpec {
            entry: entry_id.to_string(),
            expr: expr.to_string(),
            reason: e.to_string(),
        })
}

//! Error types for manifest loading and schedule construction.

use std::path::PathBuf;

/// Errors that can occur while loading manifests or building the schedule.
///
/// All of these are fatal at startup: the process must not come up with a
/// partially built schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest file is not valid JSON.
    #[error("manifest parse error in {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A manifest is missing a required key.
    #[error("manifest {path} is missing required field '{field}'")]
    ManifestField { path: PathBuf, field: &'static str },

    /// Two manifest files declare the same short name.
    #[error("duplicate job name '{0}'")]
    DuplicateJobName(String),

    /// A derived cron expression failed validation.
    #[error("invalid cron spec for '{entry}' ({expr}): {reason}")]
    InvalidCronSpec {
        entry: String,
        expr: String,
        reason: String,
    },
}

/// Result alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

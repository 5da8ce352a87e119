//! Manifest-driven schedule construction.
//!
//! This crate provides:
//! - JSON job manifest loading with two-pass deserialization
//! - Cron trigger derivation from per-job day/hour/minute fields
//! - Deterministic schedule output for the external execution engine

pub mod error;
pub mod manifest;
pub mod schedule;

pub use error::{Result, ScheduleError};
pub use manifest::{CronField, JobManifest, ManifestStore};
pub use schedule::{build_schedule, Schedule, ScheduleEntry, TaskTarget};

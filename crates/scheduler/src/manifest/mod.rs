//! JSON job manifests: one file per consumer, loaded once at startup.

mod store;


pub use self::store::{CronField, JobManifest, ManifestStore};

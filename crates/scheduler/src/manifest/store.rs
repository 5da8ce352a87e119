//! [`ManifestStore`] — filesystem-backed manifest loading.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ScheduleError};

/// An hour or minute selector: a fixed value or a raw cron field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CronField {
    /// Fixed value (e.g. `22`).
    Value(u32),
    /// Raw selector passed through to the cron expression (e.g. `"*"`, `"*/15"`).
    Raw(String),
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronField::Value(v) => write!(f, "{v}"),
            CronField::Raw(s) => f.write_str(s),
        }
    }
}

/// One job's declarative schedule, parsed from a single manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobManifest {
    /// Unique short name; doubles as the consumer lookup key.
    #[serde(rename = "shortName")]
    pub name: String,
    /// Weekday selector: names (`"mon,wed,fri"`), ranges (`"1-5"`), or `"*"`.
    pub days: String,
    pub hour: CronField,
    pub minute: CronField,
}

/// Immutable mapping from job short name to its manifest.
///
/// Built once during process bootstrap and shared read-only afterwards;
/// concurrent scheduler ticks never mutate it.
#[derive(Debug, Default)]
pub struct ManifestStore {
    manifests: BTreeMap<String, JobManifest>,
}

impl ManifestStore {
    /// Scan a directory and load every manifest file in it.
    ///
    /// Only regular files with a `.json` extension are parsed; dotfiles,
    /// other extensions, and subdirectories are skipped, not errors. Any
    /// parse, field, or duplicate-name error aborts the whole load.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut manifests = BTreeMap::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !is_manifest(&path) {
                debug!(path = %path.display(), "skipping non-manifest entry");
                continue;
            }

            let manifest = load_file(&path)?;
            if manifests.contains_key(&manifest.name) {
                return Err(ScheduleError::DuplicateJobName(manifest.name));
            }

            info!(job = %manifest.name, path = %path.display(), "loaded manifest");
            manifests.insert(manifest.name.clone(), manifest);
        }

        Ok(Self { manifests })
    }

    /// Build a store directly from already-parsed manifests.
    ///
    /// Duplicate names follow the same hard-error policy as [`load`](Self::load).
    pub fn from_manifests(manifests: impl IntoIterator<Item = JobManifest>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for manifest in manifests {
            if map.contains_key(&manifest.name) {
                return Err(ScheduleError::DuplicateJobName(manifest.name));
            }
            map.insert(manifest.name.clone(), manifest);
        }
        Ok(Self { manifests: map })
    }

    /// Look up a manifest by job short name.
    pub fn get(&self, name: &str) -> Option<&JobManifest> {
        self.manifests.get(name)
    }

    /// Iterate over `(name, manifest)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JobManifest)> {
        self.manifests.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All loaded job names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.manifests.keys().map(String::as_str).collect()
    }

    /// Number of loaded manifests.
    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    /// Whether no manifests were loaded.
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}

/// Only regular files with a `.json` extension count as manifests.
fn is_manifest(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with('.') {
            return false;
        }
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "json")
        .unwrap_or(false)
}

/// Parse a single manifest file via two-pass deserialization.
///
/// First pass: parse as a raw JSON value and check the `shortName` key, so a
/// missing name is reported as a field error rather than a generic parse
/// failure. Second pass: deserialize into the typed [`JobManifest`].
fn load_file(path: &Path) -> Result<JobManifest> {
    let contents = fs::read_to_string(path)?;

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| ScheduleError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    let has_name = value
        .get("shortName")
        .and_then(|v| v.as_str())
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    if !has_name {
        return Err(ScheduleError::ManifestField {
            path: path.to_path_buf(),
            field: "shortName",
        });
    }

    serde_json::from_value(value).map_err(|source| ScheduleError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

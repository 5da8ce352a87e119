use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    pub dispatch: DispatchConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            scheduler: SchedulerConfig::from_env(),
            dispatch: DispatchConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  scheduler: manifest_dir={}", self.scheduler.manifest_dir.display());
        tracing::info!("  dispatch:  queue_depth={}", self.dispatch.queue_depth);
    }

    /// Return a view safe for API responses.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "scheduler": { "manifest_dir": self.scheduler.manifest_dir },
            "dispatch": { "queue_depth": self.dispatch.queue_depth },
        })
    }
}

// ── Scheduler ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Directory scanned for job manifest JSON files.
    pub manifest_dir: PathBuf,
}

impl SchedulerConfig {
    fn from_env() -> Self {
        Self {
            manifest_dir: PathBuf::from(env_or("MANIFEST_DIR", "manifests")),
        }
    }
}

// ── Dispatch ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Bound of the in-process pipeline invocation channel.
    pub queue_depth: usize,
}

impl DispatchConfig {
    fn from_env() -> Self {
        Self {
            queue_depth: env_usize("PIPELINE_QUEUE_DEPTH", 256),
        }
    }
}

//! schedule-export — build the cron schedule from job manifests.
//!
//! Loads all JSON manifests from the manifest directory, derives one cron
//! entry per job plus the fixed maintenance entries, and writes the schedule
//! as JSON for the external periodic-execution engine. Any manifest or cron
//! error aborts the export: the engine never sees a partial schedule.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use harvest_scheduler::{build_schedule, ManifestStore};

/// Build and export the harvest schedule.
#[derive(Parser, Debug)]
#[command(name = "schedule-export", version, about)]
struct Cli {
    /// Directory containing job manifest JSON files (defaults to the
    /// configured manifest directory).
    #[arg(long, env = "MANIFEST_DIR")]
    manifest_dir: Option<PathBuf>,

    /// Output file for the schedule JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    harvest_core::config::load_dotenv();
    let config = harvest_core::Config::from_env();
    config.log_summary();

    let cli = Cli::parse();
    let manifest_dir = cli
        .manifest_dir
        .unwrap_or_else(|| config.scheduler.manifest_dir.clone());

    let store = ManifestStore::load(&manifest_dir)
        .with_context(|| format!("loading manifests from {}", manifest_dir.display()))?;
    let schedule = build_schedule(&store).context("building schedule")?;

    let json = serde_json::to_string_pretty(&schedule)?;
    match &cli.out {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), entries = schedule.len(), "schedule written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Tests for schedule construction.

use crate::error::ScheduleError;
use crate::manifest::{CronField, JobManifest, ManifestStore};
use crate::schedule::cron::{derive_cron, normalize_days, validate};
use crate::schedule::{build_schedule, TaskTarget};

/// Helper to build a minimal manifest for testing.
fn make_manifest(name: &str, days: &str, hour: CronField, minute: CronField) -> JobManifest {
    JobManifest {
        name: name.to_string(),
        days: days.to_string(),
        hour,
        minute,
    }
}

fn store_of(manifests: Vec<JobManifest>) -> ManifestStore {
    ManifestStore::from_manifests(manifests).unwrap()
}

// -- derive_cron -------------------------------------------------------

#[test]
fn derive_cron_fixed_hour_and_minute() {
    let manifest = make_manifest("arxiv", "mon-fri", CronField::Value(22), CronField::Value(0));
    assert_eq!(derive_cron(&manifest), "0 0 22 * * mon-fri");
}

#[test]
fn derive_cron_wildcard_hour() {
    let manifest = make_manifest(
        "hourly",
        "*",
        CronField::Raw("*".to_string()),
        CronField::Value(30),
    );
    assert_eq!(derive_cron(&manifest), "0 30 * * * *");
}

#[test]
fn normalize_days_strips_whitespace() {
    assert_eq!(normalize_days("mon, wed, fri"), "mon,wed,fri");
    assert_eq!(normalize_days(" 1-5 "), "1-5");
    assert_eq!(normalize_days("*"), "*");
}

// -- validate ----------------------------------------------------------

#[test]
fn validate_accepts_named_day_lists() {
    validate("run_arxiv", "0 0 22 * * mon,wed,fri").unwrap();
}

#[test]
fn validate_rejects_out_of_range_hour() {
    let err = validate("run_bad", "0 0 99 * * *").unwrap_err();
    match err {
        ScheduleError::InvalidCronSpec { entry, expr, .. } => {
            assert_eq!(entry, "run_bad");
            assert_eq!(expr, "0 0 99 * * *");
        }
        other => panic!("expected InvalidCronSpec, got {other:?}"),
    }
}

// -- build_schedule ----------------------------------------------------

#[test]
fn one_entry_per_manifest_plus_maintenance() {
    let store = store_of(vec![
        make_manifest("arxiv", "mon-fri", CronField::Value(22), CronField::Value(0)),
        make_manifest("pubmed", "*", CronField::Value(4), CronField::Value(15)),
    ]);

    let schedule = build_schedule(&store).unwrap();

    assert_eq!(schedule.len(), 4);
    assert!(schedule.contains_key("run_arxiv"));
    assert!(schedule.contains_key("run_pubmed"));
    assert!(schedule.contains_key("check_archive"));
    assert!(schedule.contains_key("compact_archive"));
}

#[test]
fn per_job_entries_target_run_consumer_with_name_arg() {
    let store = store_of(vec![make_manifest(
        "arxiv",
        "mon-fri",
        CronField::Value(22),
        CronField::Value(0),
    )]);

    let schedule = build_schedule(&store).unwrap();
    let entry = &schedule["run_arxiv"];

    assert_eq!(entry.entry_id, "run_arxiv");
    assert_eq!(entry.target, TaskTarget::RunConsumer);
    assert_eq!(entry.args, vec!["arxiv".to_string()]);
    assert_eq!(entry.cron, "0 0 22 * * mon-fri");
}

#[test]
fn maintenance_entries_have_literal_triggers_and_no_args() {
    let schedule = build_schedule(&ManifestStore::default()).unwrap();

    let check = &schedule["check_archive"];
    assert_eq!(check.target, TaskTarget::CheckArchive);
    assert_eq!(check.cron, "0 59 23 1 * *");
    assert!(check.args.is_empty());

    let compact = &schedule["compact_archive"];
    assert_eq!(compact.target, TaskTarget::CompactArchive);
    assert_eq!(compact.cron, "0 0 3 * * *");
    assert!(compact.args.is_empty());
}

#[test]
fn empty_store_yields_only_maintenance_entries() {
    let schedule = build_schedule(&ManifestStore::default()).unwrap();
    assert_eq!(schedule.len(), 2);
}

#[test]
fn invalid_hour_fails_at_build_time() {
    let store = store_of(vec![make_manifest(
        "bad",
        "*",
        CronField::Value(99),
        CronField::Value(0),
    )]);

    let err = build_schedule(&store).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidCronSpec { .. }));
}

#[test]
fn invalid_weekday_token_fails_at_build_time() {
    let store = store_of(vec![make_manifest(
        "bad",
        "notaday",
        CronField::Value(1),
        CronField::Value(0),
    )]);

    let err = build_schedule(&store).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidCronSpec { .. }));
}

#[test]
fn build_is_deterministic() {
    let manifests = vec![
        make_manifest("zeta", "sat,sun", CronField::Value(8), CronField::Value(45)),
        make_manifest("alpha", "1-5", CronField::Value(3), CronField::Value(0)),
    ];
    let store = store_of(manifests);

    let first = serde_json::to_string(&build_schedule(&store).unwrap()).unwrap();
    let second = serde_json::to_string(&build_schedule(&store).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn schedule_serializes_with_dotted_targets() {
    let store = store_of(vec![make_manifest(
        "arxiv",
        "*",
        CronField::Value(1),
        CronField::Value(2),
    )]);

    let schedule = build_schedule(&store).unwrap();
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(
        json["run_arxiv"]["target"],
        "harvest.tasks.run_consumer"
    );
    assert_eq!(
        json["check_archive"]["target"],
        "harvest.tasks.check_archive"
    );
}

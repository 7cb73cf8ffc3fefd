use roster_cli::{build_cli, init_tracing, run};
use std::io::Write;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let matches = build_cli().try_get_matches_from(std::iter::once("roster").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&matches, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_init_tracing_twice_is_harmless() {
    init_tracing();
    init_tracing();
    let output = run_args(&["classify", "2025-01-15", "--today", "2025-01-01"]).unwrap();
    assert_eq!(output.trim(), "due_soon");
}

#[test]
fn test_classify_boundaries() {
    let cases = [
        ("2024-12-31", "past_due"),
        ("2025-01-01", "due_soon"),
        ("2025-01-31", "due_soon"),
        ("2025-02-01", "upcoming"),
        ("2025-04-02", "renewed"),
    ];
    for (date, expected) in cases {
        let output = run_args(&["classify", date, "--today", "2025-01-01"]).unwrap();
        assert_eq!(output.trim(), expected, "{date}");
    }
}

#[test]
fn test_classify_rejects_bad_date() {
    let err = run_args(&["classify", "tomorrow", "--today", "2025-01-01"]).unwrap_err();
    assert!(format!("{err:#}").contains("tomorrow"));
}

#[test]
fn test_members_text_is_one_line_per_member() {
    let output = run_args(&["members", "--count", "15", "--seed", "4"]).unwrap();
    assert_eq!(output.lines().count(), 15);
    assert!(output.lines().next().unwrap().starts_with("NCPA-000001"));
}

#[test]
fn test_members_json_is_reproducible() {
    let a = run_args(&["members", "--count", "5", "--seed", "21", "--json"]).unwrap();
    let b = run_args(&["members", "--count", "5", "--seed", "21", "--json"]).unwrap();
    assert_eq!(a, b);
    let parsed: serde_json::Value = serde_json::from_str(&a).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn test_members_status_filter() {
    let output = run_args(&["members", "--count", "200", "--seed", "4", "--status", "churned", "--json"]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["status"] == "churned"));
}

#[test]
fn test_members_unknown_tier_fails() {
    assert!(run_args(&["members", "--count", "5", "--tier", "basic"]).is_err());
}

#[test]
fn test_renewals_bucket_filter() {
    let output = run_args(&[
        "renewals", "--count", "100", "--seed", "1", "--today", "2025-01-01", "--status", "past_due",
    ])
    .unwrap();
    assert!(!output.is_empty());
    assert!(output.lines().all(|l| l.starts_with("past_due")));
}

#[test]
fn test_applications_default_count_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "application_count = 4\nseed = 2").unwrap();
    let path = file.path().to_str().unwrap();
    let output = run_args(&["applications", "--config", path]).unwrap();
    assert_eq!(output.lines().count(), 4);
}

#[test]
fn test_summary_json_totals() {
    let output = run_args(&["summary", "--count", "120", "--seed", "3", "--today", "2025-01-01", "--json"]).unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["asOf"], "2025-01-01");
    assert_eq!(report["roster"]["total"], 120);
    assert_eq!(report["renewals"]["total"], 120);
    let bucket_sum: u64 = ["pastDue", "dueSoon", "upcoming", "renewed"]
        .iter()
        .map(|k| report["renewals"][k].as_u64().unwrap())
        .sum();
    assert_eq!(bucket_sum, 120);
}

#[test]
fn test_summary_text_mentions_sections() {
    let output = run_args(&["summary", "--count", "10", "--seed", "3", "--today", "2025-01-01"]).unwrap();
    assert!(output.starts_with("Roster as of 2025-01-01"));
    assert!(output.contains("Renewals"));
    assert!(output.contains("pharmacy"));
}

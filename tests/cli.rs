use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = "data/aircraft/regional_jets.yaml";

#[test]
fn aea_doc_prints_breakdown_table() {
    Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args(["--catalog", CATALOG, "--aircraft", "crj-200", "--target-year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== CRJ-200 (aea-default, 2025 USD) ==="))
        .stdout(predicate::str::contains("maintenance"))
        .stdout(predicate::str::contains("total"));
}

#[test]
fn aea_doc_writes_table_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("tables/crj700.txt");

    Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args([
            "--catalog",
            CATALOG,
            "--aircraft",
            "CRJ-700",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote"));

    let text = fs::read_to_string(&out).expect("table output");
    assert!(text.starts_with("=== CRJ-700 (aea-default, 2026 USD) ==="));
    assert!(text.contains("fees_and_charges"));
    assert!(text.lines().last().unwrap().starts_with("total"));
}

#[test]
fn aea_doc_writes_csv_views() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("reports/erj.csv");

    Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args([
            "--catalog",
            CATALOG,
            "--parameter-set",
            "fitted",
            "--format",
            "csv",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("csv output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("aircraft,parameter_set,target_year,view,depreciation"));
    assert!(lines[1].starts_with("ERJ-145XR,fitted,2026,annual,"));
    assert!(lines[3].contains(",per_hour,"));
}

#[test]
fn aea_doc_json_to_stdout_with_overrides() {
    let assert = Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args([
            "--catalog",
            CATALOG,
            "--method",
            "data/methods/regional_overrides.toml",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json report");
    assert_eq!(value["aircraft"], "ERJ-145XR");
    assert_eq!(value["target_year"], 2026);
    let fuel = value["per_flight"]["fuel"].as_f64().unwrap();
    assert!((fuel - 1731.0 * 0.70).abs() < 1e-6);
}

#[test]
fn aea_doc_rejects_unknown_aircraft_and_parameter_set() {
    Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args(["--catalog", CATALOG, "--aircraft", "A380"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A380"));

    Command::cargo_bin("aea_doc")
        .expect("aea_doc bin")
        .args(["--catalog", CATALOG, "--parameter-set", "tuned"])
        .assert()
        .failure();
}

#[test]
fn doc_sensitivity_prints_top_ranking() {
    Command::cargo_bin("doc_sensitivity")
        .expect("doc_sensitivity bin")
        .args(["--catalog", CATALOG, "--top", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base maintenance per flight"))
        .stdout(predicate::str::contains("airframe_labor_base_hours"));
}

#[test]
fn doc_sensitivity_writes_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("sensitivity.csv");

    Command::cargo_bin("doc_sensitivity")
        .expect("doc_sensitivity bin")
        .args([
            "--catalog",
            CATALOG,
            "--aircraft",
            "CRJ-700",
            "--perturbations=-0.1,0.1",
            "--csv",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("csv output");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "rank,coefficient,base_value,sensitivity,sensitivity_std,cost_-10pct,rel_change_-10pct,cost_+10pct,rel_change_+10pct"
    );
    assert_eq!(lines.count(), 26);
}

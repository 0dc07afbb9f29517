//! Integration tests for the statement reconciler CLI.
//!
//! These tests run the actual binary over statement text fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_reconciler(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn data_rows(csv: &str) -> Vec<Vec<String>> {
    csv.lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(l.as_bytes());
            let record = reader.records().next().unwrap().unwrap();
            record.iter().map(|f| f.to_string()).collect()
        })
        .collect()
}

#[test]
fn test_output_has_correct_header() {
    let output = run_reconciler(&[&test_data_path("statement_2025_10_21.txt")]);
    assert!(output.starts_with(
        "statement_date,transaction_date,posted_date,description,amount,inclusion_status,file_name,line"
    ));
}

#[test]
fn test_full_statement_transactions() {
    let output = run_reconciler(&[&test_data_path("statement_2025_10_21.txt")]);
    let rows = data_rows(&output);

    // Supplemental details after the marker line are not transactions.
    assert_eq!(rows.len(), 8);

    assert_eq!(rows[0][3], "CIBC BANK PMT/PAIEMENT BCIC");
    assert_eq!(rows[0][4], "-3463.00");
    assert_eq!(rows[0][5], "Exclude");

    assert_eq!(rows[2][3], "DOMINOS PIZZA #390 250-861-5731 BC");
    assert_eq!(rows[2][4], "59.36");
    assert_eq!(rows[2][7], "12");

    assert_eq!(rows[3][3], "MICROSOFT*MICROSOFT 36 MISSISSAUGA ON");
    assert_eq!(rows[3][4], "122.08");

    assert_eq!(rows[5][4], "1200.00");
    assert!(rows.iter().all(|r| r[0] == "2025-10-21"));
    assert!(rows.iter().all(|r| r[6] == "statement_2025_10_21.txt"));
}

#[test]
fn test_exclusion_from_command_line() {
    let output = run_reconciler(&[
        "--exclude",
        "INTEREST CHARGES",
        &test_data_path("statement_2025_10_21.txt"),
    ]);
    let rows = data_rows(&output);
    let interest = rows.iter().find(|r| r[3].starts_with("INTEREST")).unwrap();
    assert_eq!(interest[5], "Exclude");
}

#[test]
fn test_match_reported_with_settings_file() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.env("RUST_LOG", "info")
        .args(["--config", &test_data_path("settings.json")])
        .arg(test_data_path("statement_2025_10_21.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("statement_2025_10_21.txt: MATCH |"));
}

#[test]
fn test_mismatch_reported_but_succeeds() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.env("RUST_LOG", "info")
        .arg(test_data_path("statement_mismatch.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("MISMATCH"))
        .stderr(predicate::str::contains("Unmatched transaction text at line 4"))
        .stderr(predicate::str::contains("Difference: 5.00"));
}

#[test]
fn test_year_rollover_in_output() {
    let output = run_reconciler(&[&test_data_path("statement_2026_01_10.txt")]);
    let rows = data_rows(&output);

    assert_eq!(rows[0][1], "2025-12-31");
    assert_eq!(rows[0][2], "2026-01-02");
    assert_eq!(rows[1][1], "2026-01-02");
}

#[test]
fn test_multiple_files() {
    let output = run_reconciler(&[
        &test_data_path("statement_2026_01_10.txt"),
        &test_data_path("statement_mismatch.txt"),
    ]);
    let rows = data_rows(&output);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][6], "statement_2026_01_10.txt");
    assert_eq!(rows[3][6], "statement_mismatch.txt");
}

#[test]
fn test_json_output() {
    let output = run_reconciler(&[
        "--format",
        "json",
        "--config",
        &test_data_path("settings.json"),
        &test_data_path("statement_2025_10_21.txt"),
    ]);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let result = &value[0];
    assert_eq!(result["is_match"], true);
    assert_eq!(result["declared_purchases_total"], "2348.84");
    assert_eq!(result["computed_purchases_total"], "2348.84");
    assert_eq!(result["excluded_count"], 1);
    assert_eq!(result["transactions"].as_array().unwrap().len(), 8);
}

#[test]
fn test_tolerance_argument() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.env("RUST_LOG", "info")
        .args(["--tolerance", "5.01"])
        .arg(test_data_path("statement_mismatch.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("statement_mismatch.txt: MATCH |"));
}

#[test]
fn test_generated_settings_file() {
    let mut settings = tempfile::NamedTempFile::new().unwrap();
    write!(settings, r#"{{"difference_tolerance": "10.00"}}"#).unwrap();

    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.env("RUST_LOG", "info")
        .arg("--config")
        .arg(settings.path())
        .arg(test_data_path("statement_mismatch.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("statement_mismatch.txt: MATCH |"));
}

#[test]
fn test_invalid_settings_file_error() {
    let mut settings = tempfile::NamedTempFile::new().unwrap();
    write!(settings, r#"{{"difference_tolerance": -1}}"#).unwrap();

    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.arg("--config")
        .arg(settings.path())
        .arg(test_data_path("statement_mismatch.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_unknown_option_error() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.args(["--verbose", "x.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option '--verbose'"));
}

#[test]
fn test_unknown_format_error() {
    let mut cmd = Command::cargo_bin("statement-reconciler").unwrap();
    cmd.args(["--format", "xml", &test_data_path("statement_mismatch.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

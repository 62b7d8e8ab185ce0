//! End-to-end tests for the `dna-profiler` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = "tests/data/profiles.txt";

fn dna_profiler() -> Command {
    Command::cargo_bin("dna-profiler").unwrap()
}

#[test]
fn test_analyze_text() {
    dna_profiler()
        .args(["analyze", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profiles: 6 (4 of interest, 2 unmarked)"))
        .stdout(predicate::str::contains(
            "Doe, John: 2/3 STRs corroborated (2 required)",
        ))
        .stdout(predicate::str::contains(
            "Brown, Alex: 0/3 STRs corroborated (2 required)",
        ));
}

#[test]
fn test_analyze_json() {
    let output = dna_profiler()
        .args(["analyze", FIXTURE, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["profile_count"], 6);
    assert_eq!(
        json["unmarked"],
        serde_json::json!(["Brown, Alex", "Zhang, Wei"])
    );
    assert_eq!(json["profiles"][0]["name"], "Doe, John");
    assert_eq!(json["profiles"][0]["evaluation"]["corroborated"], 2);
}

#[test]
fn test_analyze_tsv() {
    dna_profiler()
        .args(["analyze", FIXTURE, "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name\tstatus\tcorroborated\trequired\ttotal\n",
        ))
        .stdout(predicate::str::contains("Adams, Ann\tof_interest\t0\t0\t0"));
}

#[test]
fn test_cleanup_writes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("remaining.json");

    dna_profiler()
        .args(["cleanup", FIXTURE, "--output"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 profiles:"))
        .stdout(predicate::str::contains("Remaining 4 profiles:"));

    // The snapshot can be read back and holds only flagged profiles
    dna_profiler()
        .args(["show", "--order", "in", "-f", "tsv"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Brown, Alex").not())
        .stdout(predicate::str::contains("Smith, Jane\tof_interest\tCT\t5"));
}

#[test]
fn test_remove_by_name() {
    dna_profiler()
        .args(["remove", FIXTURE, "--name", "Doe, John", "--name", "Nobody, Here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 of 2 requested profiles"))
        .stdout(predicate::str::contains("Doe, John").not());
}

#[test]
fn test_remove_lists_remaining_in_level_order() {
    // Lee, Kim is the in-order successor and takes the root's place
    dna_profiler()
        .args(["remove", FIXTURE, "--name", "Doe, John", "--format", "tsv"])
        .assert()
        .success()
        .stdout("name\nLee, Kim\nBrown, Alex\nSmith, Jane\nAdams, Ann\nZhang, Wei\n");
}

#[test]
fn test_show_level_order() {
    dna_profiler()
        .args(["show", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Doe, John [unmarked] GGx1 TACx2 CCx1\nBrown, Alex [unmarked]",
        ));
}

#[test]
fn test_export_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("db.json");

    dna_profiler()
        .args(["export", FIXTURE, "--flag"])
        .arg(&snapshot)
        .assert()
        .success();

    let content = std::fs::read_to_string(&snapshot).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["first_unknown"], "AGGTCCTACTG");
    assert_eq!(json["profiles"].as_array().unwrap().len(), 6);
    assert_eq!(json["profiles"][0]["profile"]["of_interest"], true);
}

#[test]
fn test_missing_input_fails() {
    dna_profiler()
        .args(["analyze", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "ACGT\nTTGA\ntwo\n").unwrap();

    dna_profiler()
        .arg("analyze")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number of people on line 3"));
}

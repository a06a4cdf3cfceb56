#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn rota(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rota-cli").unwrap();
    cmd.arg("--data-dir").arg(dir);
    cmd
}

#[test]
fn import_generate_list_roundtrip() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("staff.csv");
    fs::write(&csv, "handle,name,handicap\nalice,Alice,0\nbob,Bob,0\n").unwrap();

    rota(dir.path())
        .args(["import-staff", "--csv"])
        .arg(&csv)
        .assert()
        .success();

    rota(dir.path())
        .args([
            "generate",
            "--start",
            "2026-01-07",
            "--end",
            "2026-01-11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 slots, 7 filled"));

    rota(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-09"))
        .stdout(predicate::str::contains("weekend_primary"));

    rota(dir.path())
        .arg("tally")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn export_csv_uses_teams_format() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("staff.csv");
    fs::write(&csv, "handle,name\nalice,Alice\nbob,Bob\n").unwrap();

    rota(dir.path())
        .args(["import-staff", "--csv"])
        .arg(&csv)
        .assert()
        .success();
    rota(dir.path())
        .args(["generate", "--start", "2026-01-09", "--end", "2026-01-10"])
        .assert()
        .success();

    let out = dir.path().join("shifts.csv");
    rota(dir.path())
        .args(["export-csv", "--domain", "example.edu", "--out"])
        .arg(&out)
        .assert()
        .success();

    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("Team Member,Shift Start Date,Shift Start Time"));
    assert!(exported.contains("@example.edu"));
    assert!(exported.contains("21:00"));
    assert!(exported.contains("Weekend Primary"));
}

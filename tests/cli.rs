//! End-to-end tests of the cpu-spike-plot binary.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LOG_A: &str = "\
Linux 6.1.0 (bench)  10/18/2026  _x86_64_  (8 CPU)

10:00:00      UID       PID    %usr %system  %CPU   CPU  Command
10:00:01     1000      4242    1.00    1.00   2.00     3  worker
10:00:02     1000      4242   30.00    5.00  35.00     3  worker
10:00:03     1000      4242   60.00    8.00  68.00     3  worker
Average:     1000      4242   30.33    4.67  35.00     -  worker
";

const LOG_B: &str = "\
10:00:00      UID       PID    %usr %system  %CPU   CPU  Command
10:00:01     1000      5151    4.00    1.00   5.00     1  worker
10:00:02     1000      5151    4.00    1.00   5.00     1  worker
10:00:03     1000      5151   40.00    2.00  42.00     1  worker
";

fn write_logs(dir: &Path) {
    fs::write(dir.join("a.log"), LOG_A).unwrap();
    fs::write(dir.join("b.log"), LOG_B).unwrap();
}

fn pngs_in(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("input log file"));
    assert!(pngs_in(dir.path()).is_empty());
}

#[test]
fn plots_two_logs_into_joined_file_name() {
    let dir = TempDir::new().unwrap();
    write_logs(dir.path());

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .arg("a.log")
        .arg("b.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot saved as a-b.png"));

    let png = fs::read(dir.path().join("a-b.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn out_dir_and_summary_are_honoured() {
    let dir = TempDir::new().unwrap();
    write_logs(dir.path());
    let out = dir.path().join("charts");
    fs::create_dir(&out).unwrap();
    let summary = dir.path().join("summary.json");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .args(["b.log", "a.log", "--out-dir"])
        .arg(&out)
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    assert!(out.join("b-a.png").exists());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["series"][0]["label"], "b");
    assert_eq!(json["series"][0]["aligned_at"], 2);
    assert_eq!(json["series"][0]["samples"], 1);
    // a.log: banner, blank line and header are skipped; 2.00 is trimmed.
    assert_eq!(json["series"][1]["aligned_at"], 1);
    assert_eq!(json["series"][1]["samples"], 2);
    assert_eq!(json["series"][1]["peak"], 68.0);
}

#[test]
fn missing_file_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    write_logs(dir.path());

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .arg("a.log")
        .arg("missing.log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.log"));
    assert!(pngs_in(dir.path()).is_empty());
}

#[test]
fn hyphen_leading_file_name_is_a_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-run.log"), LOG_B).unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .arg("-run.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot saved as -run.png"));
    assert!(dir.path().join("-run.png").exists());
}

#[test]
fn log_without_samples_warns_and_still_plots() {
    let dir = TempDir::new().unwrap();
    write_logs(dir.path());
    fs::write(dir.path().join("empty.log"), "Average: 1 2 3 4 5.0 6 7\n").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cpu-spike-plot");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("a.log")
        .arg("empty.log")
        .assert()
        .success()
        .stderr(predicate::str::contains("empty.log: no CPU samples found"));
    assert!(dir.path().join("a-empty.png").exists());
}

//! `--log-and-exit` driven through the real binary.

mod common;

use common::{find_python, TestProject, CALC_TESTS};

#[test]
fn test_batch_empty_project_writes_zero_counts() {
    let project = TestProject::new();

    let output = project.tddmon().arg("--log-and-exit").output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(project.read("pytddmon.log"), "green=0\ntotal=0\n");
}

#[test]
fn test_batch_missing_interpreter_counts_error_units() {
    let project = TestProject::new();
    project.write("test_thing.py", "import unittest\n");

    let output = project
        .tddmon()
        .args(["--log-and-exit", "--python", "/nonexistent/python-for-tddmon"])
        .output()
        .unwrap();

    assert!(output.status.success());
    // One error unit per adapter for the single test file
    assert_eq!(project.read("pytddmon.log"), "green=0\ntotal=2\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0/2 (orange)"), "stdout: {}", stdout);
}

#[test]
fn test_batch_json_emits_ndjson_events() {
    let project = TestProject::new();

    let output = project
        .tddmon()
        .args(["--log-and-exit", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events[0]["event"], "test_run_started");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "test_run_complete");
    assert_eq!(last["command"], "batch");
    assert_eq!(last["run"], 0);
    assert_eq!(last["signal"], "green");
}

#[test]
fn test_batch_respects_project_config_log_file() {
    let project = TestProject::new();
    project.write("tddmon.toml", "[output]\nlog_file = \"results.txt\"\n");

    let output = project.tddmon().arg("--log-and-exit").output().unwrap();

    assert!(output.status.success());
    assert_eq!(project.read("results.txt"), "green=0\ntotal=0\n");
    assert!(!project.path("pytddmon.log").exists());
}

#[test]
fn test_unknown_adapter_fails_with_message() {
    let project = TestProject::new();
    project.write("tddmon.toml", "[tests]\nadapters = [\"pytest\"]\n");

    let output = project.tddmon().arg("--log-and-exit").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown test adapter 'pytest'"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_config_key_warns_but_runs() {
    let project = TestProject::new();
    project.write("tddmon.toml", "[watch]\nintervall_ms = 10\n");

    let output = project.tddmon().arg("--log-and-exit").output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("did you mean 'interval_ms'?"), "stderr: {}", stderr);
}

#[test]
fn test_missing_root_is_an_error() {
    let project = TestProject::new();
    let output = project
        .tddmon_at(&project.path("nope"))
        .arg("--log-and-exit")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("directory not found"));
}

#[test]
fn test_batch_runs_unittests_and_doctests() {
    let Some(python) = find_python() else {
        eprintln!("skipping: no python interpreter found");
        return;
    };
    let project = TestProject::new();
    project.write("test_calc.py", CALC_TESTS);

    let output = project
        .tddmon()
        .args(["--log-and-exit", "--python", &python])
        .output()
        .unwrap();

    assert!(output.status.success());
    // unittest: 1 of 2, doctest: 1 of 1
    assert_eq!(project.read("pytddmon.log"), "green=2\ntotal=3\n");
}

#[test]
fn test_batch_fixed_file_set() {
    let Some(python) = find_python() else {
        eprintln!("skipping: no python interpreter found");
        return;
    };
    let project = TestProject::new();
    project.write("calc.py", CALC_TESTS);
    // Not listed, so never run
    project.write("test_other.py", "raise SystemExit(3)\n");

    let output = project
        .tddmon()
        .args(["--log-and-exit", "--python", &python, "calc.py"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(project.read("pytddmon.log"), "green=2\ntotal=3\n");
}

#[test]
fn test_help_lists_core_flags() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_tddmon"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--log-and-exit", "--json", "--interval", "--workers", "--timeout"] {
        assert!(stdout.contains(flag), "missing {} in help:\n{}", flag, stdout);
    }
}

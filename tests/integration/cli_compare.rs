//! Smoke tests for the compare-bench driver.

use assert_cmd::Command;

#[test]
fn runs_full_suite_on_small_sizes() {
    let output = Command::cargo_bin("compare-bench")
        .unwrap()
        .args(["--sizes", "64,256", "--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Algorithm"));
    assert!(stdout.contains("quick_sort"));
    assert!(stdout.contains("binary_search"));
}

#[test]
fn exports_csv_for_a_single_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("results.csv");

    Command::cargo_bin("compare-bench")
        .unwrap()
        .args(["--algo", "merge-sort", "--sizes", "128", "--seed", "3"])
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success();

    let body = std::fs::read_to_string(&csv_path).unwrap();
    assert!(body.starts_with("algorithm,size,elapsed_ms,comparisons,swaps"));
    assert!(body.contains("merge_sort,128,"));
}

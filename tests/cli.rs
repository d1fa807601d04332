//! End-to-end tests for the `bsort` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn bsort() -> Command {
    Command::cargo_bin("bsort").unwrap()
}

#[test]
fn sorts_stdin_ascending() {
    bsort()
        .write_stdin("65 23 89 1 555555555")
        .assert()
        .success()
        .stdout("1 23 65 89 555555555\n");
}

#[test]
fn dash_file_argument_reads_stdin() {
    bsort()
        .arg("-")
        .write_stdin("3 1 2")
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn reverse_flag_sorts_descending() {
    bsort()
        .arg("--reverse")
        .write_stdin("5 -3 0 -3 5")
        .assert()
        .success()
        .stdout("5 5 0 -3 -3\n");
}

#[test]
fn sorts_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "9 8 7\n1 2 3").unwrap();

    bsort()
        .arg(file.path())
        .assert()
        .success()
        .stdout("1 2 3 7 8 9\n");
}

#[test]
fn custom_delimiters() {
    bsort()
        .args(["--in-delimiter", ",", "--out-delimiter", ","])
        .write_stdin("4,2,10")
        .assert()
        .success()
        .stdout("2,4,10\n");
}

#[test]
fn rejects_non_integer_input() {
    bsort()
        .write_stdin("1 two 3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn rejects_empty_input() {
    bsort()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no integers"));
}

#[test]
fn quiet_flag_suppresses_usage_hint() {
    bsort()
        .arg("--quiet")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--help").not());
}

#[test]
fn missing_file_fails() {
    bsort()
        .arg("definitely/not/a/file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read input"));
}

#[test]
fn rejects_unknown_flag() {
    bsort().arg("--frobnicate").assert().failure();
}

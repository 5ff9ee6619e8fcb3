//! Integration tests for the `lineswap` binary entry point.
//!
//! Exercises the process-level contract: exit statuses, diagnostics on
//! stderr, and the bytes left on disk after each invocation.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    fn new(contents: &[u8]) -> Self {
        Self::named("sample.txt", contents)
    }

    fn named(name: &str, contents: &[u8]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write sample");
        Self { dir, path }
    }

    fn dir(&self) -> &Path {
        self.dir.path()
    }

    fn contents(&self) -> Vec<u8> {
        fs::read(&self.path).expect("read sample back")
    }
}

#[test]
fn replaces_line_and_exits_zero() {
    let fixture = Fixture::new(b"a\nb\nc\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg(&fixture.path).arg("2").arg("X");
    command.assert().success().stdout("").stderr("");
    assert_eq!(fixture.contents(), b"a\nX\nc\n".to_vec());
}

#[test]
fn unterminated_last_line_gains_newline() {
    let fixture = Fixture::new(b"a\nb");
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg(&fixture.path).arg("2").arg("Y");
    command.assert().success();
    assert_eq!(fixture.contents(), b"a\nY\n".to_vec());
}

#[test]
fn out_of_range_exits_one_and_leaves_file() {
    let fixture = Fixture::new(b"a\nb\nc\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg(&fixture.path).arg("5").arg("X");
    command
        .assert()
        .code(1)
        .stderr(contains("line number 5 out of range (1-3)").and(contains("sample.txt")));
    assert_eq!(fixture.contents(), b"a\nb\nc\n".to_vec());
}

#[test]
fn missing_file_exits_one_without_creating_it() {
    let fixture = Fixture::new(b"a\n");
    let missing = fixture.path.with_file_name("nope.txt");
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg(&missing).arg("1").arg("X");
    command
        .assert()
        .code(1)
        .stderr(contains("cannot open file").and(contains("nope.txt")));
    assert!(!missing.exists());
}

#[test]
fn wrong_argument_count_exits_one_with_usage() {
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg("only-a-file");
    command.assert().code(1).stderr(contains("Usage:"));
}

#[test]
fn atomic_mode_from_environment() {
    let fixture = Fixture::new(b"keep\nswap\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command
        .env("LINESWAP_WRITE_MODE", "atomic")
        .arg(&fixture.path)
        .arg("2")
        .arg("swapped");
    command.assert().success();
    assert_eq!(fixture.contents(), b"keep\nswapped\n".to_vec());
}

#[test]
fn debug_logging_reports_replacement() {
    let fixture = Fixture::new(b"a\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command
        .arg("--log-filter=debug")
        .arg(&fixture.path)
        .arg("1")
        .arg("b");
    command.assert().success().stderr(contains("replaced line"));
}

#[test]
fn hyphenated_relative_filename_is_edited() {
    let fixture = Fixture::named("-notes.txt", b"a\nb\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command
        .current_dir(fixture.dir())
        .arg("-notes.txt")
        .arg("1")
        .arg("Z");
    command.assert().success().stderr("");
    assert_eq!(fixture.contents(), b"Z\nb\n".to_vec());
}

#[test]
fn help_as_content_is_written_not_shown() {
    let fixture = Fixture::new(b"a\nb\n");
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg(&fixture.path).arg("2").arg("--help");
    command.assert().success().stdout("");
    assert_eq!(fixture.contents(), b"a\n--help\n".to_vec());
}

#[test]
fn help_as_first_argument_prints_usage() {
    let mut command = cargo_bin_cmd!("lineswap");
    command.arg("--help");
    command.assert().success().stdout(contains("FILENAME"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("betacode").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("line"));
}

#[test]
fn convert_subcommand_help() {
    cmd()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--flavor"))
        .stdout(predicate::str::contains("--unicode-norm"))
        .stdout(predicate::str::contains("--line-break"));
}

#[test]
fn line_subcommand_help() {
    cmd()
        .args(["line", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BETA"))
        .stdout(predicate::str::contains("--flavor"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("betacode"));
}

#[test]
fn no_subcommand_fails() {
    cmd().assert().failure();
}

#[test]
fn convert_without_file_fails() {
    cmd()
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn invalid_flavor_is_rejected() {
    cmd()
        .args(["line", "A", "--flavor", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fancy"));
}

#[test]
fn invalid_unicode_norm_is_rejected() {
    cmd()
        .args(["line", "A", "--unicode-norm", "nfx"])
        .assert()
        .failure();
}

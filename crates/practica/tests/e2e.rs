//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn practica() -> Command {
    Command::cargo_bin("practica").expect("binary not found")
}

#[test]
fn help_flag() {
    practica()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursework"));
}

#[test]
fn version_flag() {
    practica()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("practica"));
}

#[test]
fn time_quarter_past() {
    practica()
        .args(["time", "03:15", "-q"])
        .assert()
        .success()
        .stdout("quarter past three\n");
}

#[test]
fn time_midnight_quirk() {
    practica()
        .args(["time", "00:00", "-q"])
        .assert()
        .success()
        .stdout("midnught\n");
}

#[test]
fn time_noon() {
    practica()
        .args(["time", "12:00", "-q"])
        .assert()
        .success()
        .stdout("noon\n");
}

#[test]
fn time_on_the_hour() {
    practica()
        .args(["time", "07:00", "-q"])
        .assert()
        .success()
        .stdout("seven, oclock\n");
}

#[test]
fn time_from_stdin() {
    practica()
        .args(["time", "-q"])
        .write_stdin("03:45\n")
        .assert()
        .success()
        .stdout("15 to four\n");
}

#[test]
fn time_wrap_to_hour_zero_fails_with_lookup_code() {
    practica()
        .args(["time", "23:45"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no numeral word for 0"));
}

#[test]
fn time_malformed_fails_with_config_code() {
    practica()
        .args(["time", "half past"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn fib_small() {
    practica()
        .args(["fib", "10", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn fib_f100() {
    practica()
        .args(["fib", "100", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn fib_zero() {
    practica()
        .args(["fib", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn fib_from_stdin() {
    practica()
        .args(["fib", "-q"])
        .write_stdin("20\n")
        .assert()
        .success()
        .stdout("6765\n");
}

#[test]
fn fib_non_numeric_stdin_fails() {
    practica()
        .args(["fib", "-q"])
        .write_stdin("twenty\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a non-negative integer"));
}

#[test]
fn fib_details_mode() {
    practica()
        .args(["fib", "100", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result digits: 21"));
}

#[test]
fn prime_true() {
    practica()
        .args(["prime", "17", "-q"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn prime_false() {
    practica()
        .args(["prime", "9", "-q"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn prime_one_is_false() {
    practica()
        .args(["prime", "1", "-q"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn prime_from_stdin() {
    practica()
        .args(["prime", "-q"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn prime_details_shows_factor() {
    practica()
        .args(["prime", "9", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smallest factor: 3"));
}

#[test]
fn prime_verbose_normal_output() {
    practica()
        .args(["prime", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17 is prime"));
}

#[test]
fn completion_bash() {
    practica()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn no_subcommand_prints_help() {
    practica()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

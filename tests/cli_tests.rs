//! End-to-end tests for the eventcal binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn eventcal() -> Command {
    let mut cmd = Command::cargo_bin("eventcal").unwrap();
    cmd.env("EVENTCAL_TEST_TIME", "2024-03-06")
        .env("LC_ALL", "en_US.UTF-8")
        .env_remove("EVENTCAL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn current_month_without_arguments() {
    eventcal()
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar 2024"))
        .stdout(predicate::str::contains("Su  Mo  Tu  We  Th  Fr  Sa"))
        .stdout(predicate::str::contains(" 6<"));
}

#[test]
fn explicit_month_and_events() {
    eventcal()
        .args(["3", "2024", "-e", "2024-03-15 14:30", "-e", "2024-03-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15*"))
        .stdout(predicate::str::contains(" 6+"))
        .stdout(predicate::str::contains("25  26  27  28  29   1   2"));
}

#[test]
fn monday_start() {
    eventcal()
        .args(["-m", "3", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mo  Tu  We  Th  Fr  Sa  Su"))
        .stdout(predicate::str::contains("26  27  28  29   1   2   3"));
}

#[test]
fn custom_and_invalid_title_format() {
    eventcal()
        .args(["-f", "%B %Y", "3", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"));

    eventcal()
        .args(["-f", "%H:%M", "3", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar 2024"));
}

#[test]
fn offset_navigates_months() {
    eventcal()
        .args(["-o", "-3", "3", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dec 2023"));
}

#[test]
fn press_and_long_press() {
    eventcal()
        .args([
            "3",
            "2024",
            "--press",
            "2024-03-15",
            "--long-press",
            "2024-04-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date click : 2024-03-15"))
        .stdout(predicate::str::contains("Date long click : 2024-04-06"));
}

#[test]
fn press_outside_grid_fails() {
    eventcal()
        .args(["3", "2024", "--press", "2024-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "eventcal: 2024-05-01 is not shown in the current grid",
        ));
}

#[test]
fn invalid_arguments_fail() {
    eventcal()
        .args(["13", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month: 13"));

    eventcal()
        .args(["-e", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date: someday"));
}

#[test]
fn config_file_applies() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "week_start = \"monday\"\ntitle_format = \"%B %Y\"\nevents = [\"2024-03-15\"]"
    )
    .unwrap();

    eventcal()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("Mo  Tu"))
        .stdout(predicate::str::contains("15*"));
}

#[test]
fn config_from_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "week_start = \"monday\"").unwrap();

    eventcal()
        .env("EVENTCAL_CONFIG", file.path())
        .arg("-s")
        .assert()
        .success()
        .stdout(predicate::str::contains("Su  Mo"));
}

#[test]
fn missing_config_fails() {
    eventcal()
        .args(["--config", "/nonexistent/eventcal.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

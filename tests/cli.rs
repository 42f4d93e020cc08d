use assert_cmd::Command;
use predicates::prelude::*;

fn paintboard_cmd() -> Command {
    Command::cargo_bin("paintboard").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    paintboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive raster paint surface"));
}

#[test]
fn rejects_a_surface_too_narrow_for_the_toolbar() {
    paintboard_cmd()
        .args(["--width", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("surface width must be at least"));
}

#[test]
fn rejects_a_surface_too_short_for_drawing() {
    paintboard_cmd()
        .args(["--height", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("surface height must be at least"));
}

#[test]
fn rejects_unknown_flags() {
    paintboard_cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

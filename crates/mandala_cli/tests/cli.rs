//! CLI command integration tests.
//! All commands run against the built-in analytic ephemeris.

use assert_cmd::Command;
use predicates::prelude::*;

fn mandala() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mandala").unwrap()
}

#[test]
fn activation_at_zero_point() {
    mandala()
        .args(["activation", "302"])
        .assert()
        .success()
        .stdout(predicate::str::contains("41.1.1.1.1"));
}

#[test]
fn activation_accepts_negative_longitude() {
    // -58 deg is the same point as 302 deg.
    mandala()
        .args(["activation", "-58"])
        .assert()
        .success()
        .stdout(predicate::str::contains("41.1.1.1.1"));
}

#[test]
fn activation_rejects_nan() {
    mandala()
        .args(["activation", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a finite number"));
}

#[test]
fn opposite_gate_41_is_31() {
    mandala()
        .args(["opposite", "41"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate 41 <-> Gate 31"));
}

#[test]
fn opposite_unknown_gate_fails() {
    mandala()
        .args(["opposite", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gate 65 is not on the wheel"));
}

#[test]
fn node_at_epoch() {
    mandala()
        .args(["node", "--date", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("124.98"));
}

#[test]
fn transits_table_at_equinox() {
    mandala()
        .args(["transits", "--date", "2024-03-20T03:06:00Z", "--depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transits at 2024-03-20T03:06:00.000Z"))
        .stdout(predicate::str::contains("North Node"))
        .stdout(predicate::str::contains("25.2"))
        .stdout(predicate::str::contains("Active gates:"))
        .stdout(predicate::str::contains("Defined centers:"));
}

#[test]
fn transits_json_reply() {
    mandala()
        .args(["transits", "--json", "--date", "2024-03-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"date\": \"2024-03-20T00:00:00.000Z\""))
        .stdout(predicate::str::contains("\"southNode\""));
}

#[test]
fn transits_json_bad_date() {
    mandala()
        .args(["transits", "--json", "--date", "yesterday-ish"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid date format"))
        .stderr(predicate::str::contains("status 400"));
}

#[test]
fn transits_out_of_range_fails() {
    mandala()
        .args(["transits", "--date", "1700-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to calculate transits"));
}

#[test]
fn ephemeris_february_leap_year() {
    mandala()
        .args(["ephemeris", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01.02.2024 12:00"))
        .stdout(predicate::str::contains("29.02.2024 12:00"))
        .stdout(predicate::str::contains("*"));
}

#[test]
fn ephemeris_json_rows() {
    mandala()
        .args(["ephemeris", "--month", "2023-04", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-04-30T12:00:00.000Z"))
        .stdout(predicate::str::contains("\"transits\""));
}

#[test]
fn ephemeris_bad_month() {
    mandala()
        .args(["ephemeris", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid month"));
}

#[test]
fn longitude_of_pluto() {
    mandala()
        .args(["longitude", "--body", "pluto", "--date", "2024-01-01T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pluto at 2024-01-01T00:00:00Z"));
}

#[test]
fn longitude_unknown_body() {
    mandala()
        .args(["longitude", "--body", "earth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown body"));
}

#[test]
fn wheel_lists_64_gates() {
    let output = mandala().arg("wheel").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 64);
    assert!(stdout.lines().next().unwrap().contains("gate 41"));
    assert!(stdout.contains("13°15'00\" Scorpio"));
}

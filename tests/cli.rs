use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eds"));
}

#[test]
fn countries_lists_known_codes() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.arg("countries");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USA"))
        .stdout(predicate::str::contains("United States"));
}

#[test]
fn indicators_lists_known_codes_as_json() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["indicators", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NY.GDP.MKTP.CD"))
        .stdout(predicate::str::contains("GDP (current US$)"));
}

#[test]
fn snapshot_rejects_invalid_country_before_any_network_call() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["snapshot", "-c", "us", "-i", "NY.GDP.MKTP.CD"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid country code"));
}

#[test]
fn data_rejects_invalid_indicator_before_any_network_call() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["data", "-c", "USA", "-i", "NY-GDP-MKTP-CD"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid indicator code"));
}

#[test]
fn snapshot_rejects_empty_indicator_list() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["snapshot", "-c", "USA", "-i", " , "]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least one indicator code"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn data_online_gdp() {
    let mut cmd = Command::cargo_bin("eds").unwrap();
    cmd.args(["data", "-c", "DEU", "-i", "SP.POP.TOTL", "--year", "2020"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SP.POP.TOTL"));
}

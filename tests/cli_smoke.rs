use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_lists_all_flags() {
    let mut cmd = Command::cargo_bin("wstat").unwrap();
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let help = String::from_utf8(out).unwrap();
    for flag in [
        "--workspace",
        "--username",
        "--app-password",
        "--days",
        "--workers",
        "--branches",
        "--json",
        "--ndjson",
    ] {
        assert!(help.contains(flag), "missing {flag} in --help output");
    }
}

#[test]
fn missing_credentials_exit_nonzero() {
    let mut cmd = Command::cargo_bin("wstat").unwrap();
    cmd.env_remove("WSTAT_WORKSPACE")
        .env_remove("WSTAT_USERNAME")
        .env_remove("WSTAT_APP_PASSWORD");
    cmd.assert().failure();
}

#[test]
fn version_prints() {
    let mut cmd = Command::cargo_bin("wstat").unwrap();
    cmd.arg("--version").assert().success();
}

//! End-to-end tests for the `web3-threatmodel` binary.

#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use threatmodel::{
    render,
    render::{CLOSING, DISCLAIMER},
    Registry, Section,
};

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("web3-threatmodel").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn prints_full_profile() {
    bin()
        .args(["--profile", "aztec"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Threat model profile: Aztec"))
        .stdout(predicate::str::contains(DISCLAIMER))
        .stdout(predicate::str::ends_with(format!("{CLOSING}\n")));
}

#[test]
fn prints_single_section() {
    bin()
        .args(["--profile", "zama", "--section", "assets"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Assets to protect:\n\n1. "))
        .stdout(predicate::str::contains("Overview").not());
}

#[test]
fn lists_profiles() {
    bin()
        .arg("--list-profiles")
        .assert()
        .success()
        .stdout("aztec\nzama\nsoundness\n");
}

#[test]
fn unknown_profile_fails() {
    bin()
        .args(["--profile", "doesnotexist"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("doesnotexist"));
}

#[test]
fn unknown_section_fails() {
    bin()
        .args(["--profile", "aztec", "--section", "bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn missing_profile_fails() {
    bin()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--profile"));
}

#[test]
fn search_reports_hits() {
    bin()
        .args(["search", "-i", "bridge"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Profile: aztec ===\n"))
        .stdout(predicate::str::contains("[assets]"));
}

#[test]
fn search_without_matches_fails() {
    bin()
        .args(["search", "no such text anywhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no matches"));
}

#[test]
fn export_matches_rendered_text() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("exports");

    bin()
        .arg("export")
        .arg("--out-dir")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found profiles: aztec, zama, soundness"))
        .stdout(predicate::str::contains("Done."));

    let registry = Registry::builtin().unwrap();
    for profile in registry.iter() {
        let written = fs::read_to_string(dir.join(format!("{}.txt", profile.key()))).unwrap();
        assert_eq!(written, render(profile, Section::Full).to_string());
    }
}

#[test]
fn export_markdown_wraps_text() {
    let tmp = tempdir().unwrap();

    bin()
        .arg("export")
        .arg("--out-dir")
        .arg(tmp.path())
        .args(["--format", "md", "--heading-level", "2"])
        .assert()
        .success();

    let written = fs::read_to_string(tmp.path().join("zama.md")).unwrap();
    assert!(written.starts_with("## Threat model: `zama`\n\n```text\n"));
}

#[test]
fn config_file_sets_export_format() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("threatmodel.toml");
    fs::write(&config, "_version = \"1\"\nformat = \"md\"\n").unwrap();
    let dir = tmp.path().join("out");

    bin()
        .arg("--config")
        .arg(&config)
        .arg("export")
        .arg("--out-dir")
        .arg(&dir)
        .assert()
        .success();

    assert!(dir.join("soundness.md").is_file());
}

#[test]
fn compare_identical_profiles() {
    bin()
        .args(["compare", "aztec", "aztec"])
        .assert()
        .success()
        .stdout("Profiles are identical (under the chosen options).\n");
}

#[test]
fn compare_different_profiles() {
    bin()
        .args(["compare", "aztec", "zama", "--section", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "--- aztec (overview)\n+++ zama (overview)\n@@",
        ));
}

#[test]
fn table_lists_every_profile() {
    bin()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("| Profile | Description |\n"))
        .stdout(predicate::str::contains("| `zama` |"));
}

#[test]
fn risk_json_is_valid() {
    let output = bin()
        .args(["risk", "--profile", "soundness", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["profile"], "soundness");
    assert!(value["matrix"].as_array().is_some_and(|cells| !cells.is_empty()));
}

#[test]
fn completions_for_bash() {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web3-threatmodel"));
}

#[test]
fn compare_accepts_huge_context() {
    bin()
        .args(["compare", "aztec", "zama", "-C", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- aztec\n+++ zama\n@@"));
}

#[test]
fn search_lists_profiles_even_without_matches() {
    bin()
        .args(["search", "--show-profiles", "-p", "zama", "no such text anywhere"])
        .assert()
        .code(1)
        .stdout("Profiles: zama\n")
        .stderr(predicate::str::contains("no matches"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    bin()
        .args(["-vv", "--profile", "aztec"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Threat model profile: Aztec"))
        .stderr(predicate::str::contains("looking up profile"));
}

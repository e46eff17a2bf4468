//! Integration tests for the `vyos` CLI binary.
//!
//! Argument parsing, connection resolution and diagnostics run without a
//! router; lookups run against a local wiremock server.
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NO_CONFIG: &str = "/tmp/vyos-cli-test-nonexistent/config.toml";

/// Build a [`Command`] for the `vyos` binary with env isolation.
///
/// Clears all `VYOS_*` env vars and points the config file at a
/// nonexistent path so tests never touch the user's real configuration.
fn vyos_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("vyos");
    cmd.env("HOME", "/tmp/vyos-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/vyos-cli-test-nonexistent")
        .env("VYOS_CONFIG", NO_CONFIG)
        .env_remove("VYOS_PROFILE")
        .env_remove("VYOS_HOST")
        .env_remove("VYOS_KEY")
        .env_remove("VYOS_INSECURE")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn mount_interface(server: &MockServer, name: &str, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .and(body_string_contains(name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": data,
            "error": null
        })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = vyos_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    vyos_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("VyOS")
            .and(predicate::str::contains("ethernet"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    vyos_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vyos"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    vyos_cmd().arg("bridges").assert().code(2);
}

#[test]
fn test_ethernet_requires_a_name() {
    vyos_cmd()
        .args(["--host", "192.0.2.1", "--key", "k", "ethernet"])
        .assert()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    vyos_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vyos"));
}

// ── Connection resolution ───────────────────────────────────────────

#[test]
fn test_missing_host_and_key_is_resolution_error() {
    let output = vyos_cmd().args(["ethernet", "eth0"]).output().unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolution"), "stderr:\n{stderr}");
    assert!(stderr.contains("VYOS_HOST"), "stderr:\n{stderr}");
    assert!(stderr.contains("VYOS_KEY"), "stderr:\n{stderr}");
}

#[test]
fn test_env_host_without_key_reports_only_key() {
    let output = vyos_cmd()
        .env("VYOS_HOST", "192.0.2.1")
        .args(["ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("VYOS_KEY"), "stderr:\n{stderr}");
    assert!(!stderr.contains("host is not set"), "stderr:\n{stderr}");
}

#[test]
fn test_config_show_masks_key_and_reports_sources() {
    let output = vyos_cmd()
        .env("VYOS_HOST", "router.lan")
        .env("VYOS_INSECURE", "true")
        .args(["--key", "super-secret", "-o", "json", "config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("super-secret"), "stdout:\n{stdout}");

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["host"], "router.lan");
    assert_eq!(view["host_source"], "environment");
    assert_eq!(view["key"], "****");
    assert_eq!(view["key_source"], "explicit");
    assert_eq!(view["insecure"], true);
    assert_eq!(view["timeout_secs"], 30);
}

#[test]
fn test_empty_host_flag_falls_back_to_environment() {
    vyos_cmd()
        .env("VYOS_HOST", "10.1.1.1")
        .args(["--host", "", "--key", "abc", "-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""host": "10.1.1.1""#));
}

#[test]
fn test_profile_from_config_file() {
    let file = config_file(
        r#"
default_profile = "lab"

[profiles.lab]
host = "https://192.0.2.1"
key = "lab-key"
timeout = 7
"#,
    );

    vyos_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""profile": "lab""#)
                .and(predicate::str::contains(r#""timeout_secs": 7"#))
                .and(predicate::str::contains("lab-key").not()),
        );
}

#[test]
fn test_unknown_profile_lists_available() {
    let file = config_file("[profiles.lab]\nhost = \"r1\"\n");

    let output = vyos_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["-p", "prod", "ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("prod"), "stderr:\n{stderr}");
    assert!(stderr.contains("lab"), "stderr:\n{stderr}");
}

#[test]
fn test_config_path_honours_override() {
    vyos_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(NO_CONFIG));
}

#[test]
fn test_config_profiles_marks_default() {
    let file = config_file("default_profile = \"b\"\n[profiles.a]\n[profiles.b]\n");

    vyos_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout("a\nb (default)\n");
}

// ── Lookups ─────────────────────────────────────────────────────────

#[test]
fn test_invalid_interface_name_is_request_error() {
    let output = vyos_cmd()
        .args(["--host", "192.0.2.1", "--key", "k", "ethernet", "eth 0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("request"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ethernet_lookup_json() {
    let server = MockServer::start().await;
    mount_interface(
        &server,
        "eth0",
        json!({ "address": ["192.168.1.1/24", "192.168.1.2/24"], "hw-id": "00:11:22" }),
    )
    .await;

    let output = vyos_cmd()
        .args(["--host", &server.uri(), "--key", "abc", "-o", "json"])
        .args(["ethernet", "eth0"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        records,
        json!([{
            "name": "eth0",
            "addresses": ["192.168.1.1/24", "192.168.1.2/24"],
            "hw_id": "00:11:22"
        }])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ethernet_lookup_uses_environment() {
    let server = MockServer::start().await;
    mount_interface(&server, "eth1", json!({ "address": "10.0.0.1/24" })).await;

    vyos_cmd()
        .env("VYOS_HOST", server.uri())
        .env("VYOS_KEY", "abc")
        .args(["-o", "plain", "eth", "eth1"])
        .assert()
        .success()
        .stdout("eth1\t10.0.0.1/24\t\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_partial_failure_prints_successes() {
    let server = MockServer::start().await;
    mount_interface(&server, "eth0", json!({ "hw-id": "aa:bb" })).await;
    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .and(body_string_contains("eth9"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "data": null,
            "error": "Configuration under specified path is empty"
        })))
        .mount(&server)
        .await;

    let output = vyos_cmd()
        .args(["--host", &server.uri(), "--key", "abc", "-o", "plain"])
        .args(["ethernet", "eth0", "eth9"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "eth0\t\taa:bb\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2 lookups failed"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_key_exits_with_auth_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    vyos_cmd()
        .args(["--host", &server.uri(), "--key", "wrong", "ethernet", "eth0"])
        .assert()
        .code(3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_string_address_is_decode_error() {
    let server = MockServer::start().await;
    mount_interface(&server, "eth0", json!({ "address": ["10.0.0.1/24", 7] })).await;

    let output = vyos_cmd()
        .args(["--host", &server.uri(), "--key", "abc", "ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(9));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decode"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_router_exits_with_timeout_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": {}, "error": null }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let output = vyos_cmd()
        .args(["--host", &server.uri(), "--key", "abc", "--timeout", "1"])
        .args(["ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(8), "{}", combined_output(&output));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timed out"), "stderr:\n{stderr}");
}

#[test]
fn test_refused_connection_exits_with_connection_code() {
    let output = vyos_cmd()
        .args(["--host", "http://127.0.0.1:1", "--key", "abc", "ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not connect"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_key_shows_router_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/retrieve"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let output = vyos_cmd()
        .args(["--host", &server.uri(), "--key", "wrong", "ethernet", "eth0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid API key"), "stderr:\n{stderr}");
}

//! Integration tests for the `unifi-tf` binary.
//!
//! Argument handling and offline commands run without a controller; the
//! lifecycle tests drive the binary against a wiremock controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the binary with env isolation.
///
/// Clears all `UNIFI_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn unifi_tf_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifi-tf");
    cmd.env("HOME", "/tmp/unifi-tf-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unifi-tf-test-nonexistent")
        .env_remove("UNIFI_CONFIG")
        .env_remove("UNIFI_API_URL")
        .env_remove("UNIFI_USERNAME")
        .env_remove("UNIFI_PASSWORD")
        .env_remove("UNIFI_SITE")
        .env_remove("UNIFI_INSECURE")
        .env_remove("UNIFI_TIMEOUT")
        .env_remove("UNIFI_PLATFORM")
        .env_remove("UNIFI_LOG_JSON")
        .env_remove("RUST_LOG");
    cmd
}

/// Point the binary at a mock classic controller.
fn against(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = unifi_tf_cmd();
    cmd.env("UNIFI_PASSWORD", "secret").args([
        "--api-url",
        &server.uri(),
        "--username",
        "admin",
        "--platform",
        "classic",
        "--output",
        "json-compact",
    ]);
    cmd
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data }))
}

async fn mock_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
}

/// Run a blocking assert_cmd invocation off the runtime driving wiremock.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unifi_tf_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    unifi_tf_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("create")
            .and(predicate::str::contains("import"))
            .and(predicate::str::contains("port-profile"))
            .and(predicate::str::contains("device-lookup")),
    );
}

#[test]
fn test_version_flag() {
    unifi_tf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unifi-tf"));
}

#[test]
fn test_completions_zsh() {
    unifi_tf_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_unknown_resource_kind() {
    unifi_tf_cmd()
        .args(["read", "firewall", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

// ── Offline validation ──────────────────────────────────────────────

#[test]
fn test_validate_prints_controller_payload() {
    let output = unifi_tf_cmd()
        .args(["--output", "json-compact", "validate", "vpn-server"])
        .write_stdin(
            r#"{"name":"vpn","vpn_type":"l2tp-server","subnet":"10.8.0.1/24",
                "dhcp_start":"10.8.0.2","dhcp_stop":"10.8.0.20",
                "dhcp_dns":["1.1.1.1","1.0.0.1"],"radius_profile_id":"r1",
                "pre_shared_key":"psk"}"#,
        )
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["purpose"], "remote-user-vpn");
    assert_eq!(payload["ip_subnet"], "10.8.0.1/24");
    assert_eq!(payload["dhcpd_dns_1"], "1.1.1.1");
    assert_eq!(payload["dhcpd_dns_3"], "");
    assert_eq!(payload["dhcpd_dns_enabled"], true);
}

#[test]
fn test_validate_reports_field_with_usage_exit_code() {
    unifi_tf_cmd()
        .args(["validate", "device"])
        .write_stdin("mac: aa:bb:cc:dd:ee:ff\nport_override:\n  - number: 1\n    link_speed: \"7\"\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("link_speed"));
}

#[test]
fn test_validate_rejects_malformed_yaml() {
    unifi_tf_cmd()
        .args(["validate", "radius-user"])
        .write_stdin("username: [unterminated")
        .assert()
        .code(2);
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_missing_url_is_a_usage_error() {
    unifi_tf_cmd()
        .args(["read", "radius-user", "a1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_explicit_config_path_must_exist() {
    unifi_tf_cmd()
        .args(["--config", "/tmp/unifi-tf-test-nonexistent/none.toml"])
        .args(["read", "device", "d1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    // nothing listens on port 9; the config is read, then the connect fails
    std::fs::write(
        &file,
        "api_url = \"http://127.0.0.1:9\"\nusername = \"admin\"\npassword = \"pw\"\nplatform = \"classic\"\ntimeout = 2\n",
    )
    .unwrap();

    unifi_tf_cmd()
        .arg("--config")
        .arg(&file)
        .args(["read", "device", "d1"])
        .assert()
        .code(7);
}

// ── Against a mock controller ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_read_gone_prints_null() {
    let server = MockServer::start().await;
    mock_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/rest/account/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut cmd = against(&server);
    cmd.args(["read", "radius-user", "gone"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_device_by_site_and_mac() {
    let server = MockServer::start().await;
    mock_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/s/site1/stat/device"))
        .respond_with(ok(json!([{ "_id": "d1", "mac": "aa:bb:cc:dd:ee:ff", "name": "core" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/s/site1/stat/device/d1"))
        .respond_with(ok(json!([{ "_id": "d1", "mac": "aa:bb:cc:dd:ee:ff", "name": "core" }])))
        .mount(&server)
        .await;

    let mut cmd = against(&server);
    cmd.args(["import", "device", "site1:aa:bb:cc:dd:ee:ff"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{output:?}");
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["id"], "d1");
    assert_eq!(state["site"], "site1");
    assert_eq!(state["name"], "core");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_device_lookup_not_found_exit_code() {
    let server = MockServer::start().await;
    mock_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;

    let mut cmd = against(&server);
    cmd.args(["device-lookup", "--mac", "aa:bb:cc:dd:ee:ff"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4), "{output:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_radius_user_from_stdin() {
    let server = MockServer::start().await;
    mock_session(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/s/default/rest/account"))
        .and(body_partial_json(json!({ "name": "alice", "x_password": "pw", "vlan": 20 })))
        .respond_with(ok(json!([{ "_id": "a1", "name": "alice", "x_password": "pw", "vlan": 20 }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = against(&server);
    cmd.args(["create", "radius-user"])
        .write_stdin("username: alice\npassword: pw\nvlan_id: 20\n");
    let output = run(cmd).await;

    assert!(output.status.success(), "{output:?}");
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["id"], "a1");
    assert_eq!(state["vlan_id"], 20);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_device_warns_and_makes_no_calls() {
    let server = MockServer::start().await;
    mock_session(&server).await;

    let mut cmd = against(&server);
    cmd.args(["delete", "device"])
        .write_stdin(r#"{"id":"d1","site":"default","mac":"aa:bb:cc:dd:ee:ff"}"#);
    let output = run(cmd).await;

    assert!(output.status.success(), "{output:?}");
    let diagnostics: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(diagnostics[0]["severity"], "warning");

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests
            .iter()
            .all(|r| r.url.path() == "/api/login" || r.url.path() == "/api/logout"),
        "unexpected requests: {requests:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_requires_id() {
    let server = MockServer::start().await;
    mock_session(&server).await;

    let mut cmd = against(&server);
    cmd.args(["update", "radius-user"])
        .write_stdin(r#"{"username":"alice","password":"pw"}"#);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("`id`"));
}

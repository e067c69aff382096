#![allow(clippy::unwrap_used)]
// Integration tests for `LegacyClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unifi_tf_api::legacy::models::{Account, Device, SettingRadius};
use unifi_tf_api::{ControllerPlatform, Error, LegacyClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LegacyClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = LegacyClient::with_client(
        reqwest::Client::new(),
        base_url,
        ControllerPlatform::ClassicController,
    );
    (server, client)
}

fn site_path(suffix: &str) -> String {
    format!("/api/s/default/{suffix}")
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data }))
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_captures_csrf() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-CSRF-Token", "tok-1")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(site_path("rest/account/a1")))
        .and(header("X-CSRF-Token", "tok-1"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "test-password".to_string().into();
    client.login("admin", &secret).await.unwrap();
    client.delete_account("default", "a1").await.unwrap();
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong-password".to_string().into();
    let result = client.login("admin", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unifi_os_paths_are_prefixed() {
    let server = MockServer::start().await;
    let client = LegacyClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        ControllerPlatform::UnifiOs,
    );

    Mock::given(method("GET"))
        .and(path("/proxy/network/api/s/branch/rest/portconf"))
        .respond_with(ok(json!([{ "_id": "p1", "name": "All" }])))
        .mount(&server)
        .await;

    let profiles = client.list_port_profiles("branch").await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "All");
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("stat/device")))
        .respond_with(ok(json!([{
            "_id": "abc123",
            "mac": "aa:bb:cc:dd:ee:ff",
            "type": "usw",
            "name": "Switch-24",
            "model": "US24",
            "adopted": true,
            "port_overrides": [{ "port_idx": 1, "name": "uplink" }]
        }])))
        .mount(&server)
        .await;

    let devices = client.list_devices("default").await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].id, "abc123");
    assert!(devices[0].adopted);
    assert_eq!(devices[0].port_overrides[0].name, "uplink");
}

#[tokio::test]
async fn test_get_device_empty_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("stat/device/missing")))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;

    let result = client.get_device("default", "missing").await;
    assert!(matches!(result, Err(Error::NotFound { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("rest/account/gone")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_account("default", "gone").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_envelope_not_found_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("rest/networkconf/n1")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NotFound" },
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client.get_network("default", "n1").await.unwrap_err();
    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn test_update_device_omits_controller_owned_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(site_path("rest/device/d1")))
        .and(body_partial_json(json!({
            "mac": "aa:bb:cc:dd:ee:ff",
            "name": "core",
            "port_overrides": [],
            "ethernet_overrides": []
        })))
        .respond_with(ok(json!([{ "_id": "d1", "mac": "aa:bb:cc:dd:ee:ff", "name": "core" }])))
        .expect(1)
        .mount(&server)
        .await;

    let device = Device {
        id: "d1".into(),
        mac: "aa:bb:cc:dd:ee:ff".into(),
        name: "core".into(),
        disabled: Some(true),
        ..Device::default()
    };
    let updated = client.update_device("default", &device).await.unwrap();
    assert_eq!(updated.name, "core");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("disabled").is_none());
}

// ── Settings ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_and_set_radius_setting() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("get/setting/radius")))
        .respond_with(ok(json!([{
            "_id": "s1",
            "key": "radius",
            "enabled": true,
            "x_secret": "shh",
            "auth_port": 1812
        }])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(site_path("set/setting/radius")))
        .and(body_partial_json(json!({ "enabled": false })))
        .respond_with(ok(json!([{ "_id": "s1", "key": "radius", "enabled": false }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut setting: SettingRadius = client.get_setting("default", "radius").await.unwrap();
    assert_eq!(setting.auth_port, Some(1812));
    setting.enabled = false;
    let stored = client
        .set_setting("default", "radius", &setting)
        .await
        .unwrap();
    assert!(!stored.enabled);
}

// ── Accounts ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_account() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(site_path("rest/account")))
        .and(body_partial_json(json!({ "name": "alice", "x_password": "pw", "vlan": 20 })))
        .respond_with(ok(json!([{ "_id": "a1", "name": "alice", "x_password": "pw", "vlan": 20 }])))
        .mount(&server)
        .await;

    let account = Account {
        name: "alice".into(),
        x_password: "pw".into(),
        vlan: Some(20),
        ..Account::default()
    };
    let created = client.create_account("default", &account).await.unwrap();
    assert_eq!(created.id, "a1");
}

#[tokio::test]
async fn test_legacy_error_carries_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(site_path("rest/account")))
        .respond_with(ok(json!([])).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NameExisted" },
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client
        .create_account("default", &Account::default())
        .await
        .unwrap_err();
    match err {
        Error::LegacyApi { message } => assert_eq!(message, "api.err.NameExisted"),
        other => panic!("expected LegacyApi error, got: {other:?}"),
    }
}

// ── Networks ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_network_sends_name() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(site_path("rest/networkconf/n1")))
        .and(body_partial_json(json!({ "name": "vpn" })))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_network("default", "n1", "vpn").await.unwrap();
}

#[tokio::test]
async fn test_unifi_os_error_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("rest/networkconf/n1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 401, "message": "Unauthorized" }
        })))
        .mount(&server)
        .await;

    let err = client.get_network("default", "n1").await.unwrap_err();
    assert!(err.is_auth_expired());
}

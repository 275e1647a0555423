//! End-to-end tests for the echo API.

use std::time::Duration;

use http_echo::net::probe::is_port_in_use;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_every_method_gets_200_with_its_verb() {
    let (addr, shutdown) = common::spawn_echo_server().await;
    let client = common::client();

    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let res = client
            .request(method.parse().unwrap(), format!("http://{}/anything", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 200, "{} should be echoed", method);
        let json: Value = res.json().await.unwrap();
        assert_eq!(json["request_details"]["method"], *method);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_single_query_param_is_a_string() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/user?id=123456", addr))
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    let id = &json["request_details"]["query_params"]["id"];
    assert_eq!(id, "123456");
    assert!(!id.is_array(), "single occurrence must not collapse to an array");

    shutdown.trigger();
}

#[tokio::test]
async fn test_repeated_query_param_is_an_ordered_array() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/items?id=1&id=2", addr))
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    assert_eq!(
        json["request_details"]["query_params"]["id"],
        serde_json::json!(["1", "2"])
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_without_body_echoes_empty_string() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    assert_eq!(json["request_details"]["endpoint"], "/");
    assert_eq!(json["request_details"]["body"], "");

    shutdown.trigger();
}

#[tokio::test]
async fn test_text_body_round_trips_exactly() {
    let (addr, shutdown) = common::spawn_echo_server().await;
    let payload = "name=test&note=ünïcödé körper";

    let res = common::client()
        .post(format!("http://{}/user", addr))
        .body(payload)
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    assert_eq!(json["request_details"]["body"], payload);

    shutdown.trigger();
}

#[tokio::test]
async fn test_header_names_come_back_lowercased() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .header("X-Custom-Header", "custom-value")
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    let headers = &json["request_details"]["headers"];
    assert_eq!(headers["x-custom-header"], "custom-value");
    assert!(headers.get("X-Custom-Header").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_user_lookup_end_to_end() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/user?id=123456", addr))
        .header("User-Agent", "test-agent")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );

    let json: Value = res.json().await.unwrap();
    let details = &json["request_details"];
    assert_eq!(details["method"], "GET");
    assert_eq!(details["endpoint"], "/user");
    assert_eq!(details["query_params"]["id"], "123456");
    assert_eq!(details["headers"]["user-agent"], "test-agent");
    assert_eq!(details["body"], "");

    shutdown.trigger();
}

#[tokio::test]
async fn test_raw_body_with_special_characters() {
    let (addr, shutdown) = common::spawn_echo_server().await;
    let payload = r"%$<>?@#^&*[]{}\;'";

    let res = common::client()
        .post(format!("http://{}/raw", addr))
        .body(payload)
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    assert_eq!(json["request_details"]["method"], "POST");
    assert_eq!(json["request_details"]["endpoint"], "/raw");
    assert_eq!(json["request_details"]["body"], payload);

    shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_utf8_body_is_replaced_not_fatal() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .post(format!("http://{}/raw", addr))
        .body(vec![0x66, 0xff, 0x6f])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let json: Value = res.json().await.unwrap();
    let body = json["request_details"]["body"].as_str().unwrap();
    assert!(body.contains('\u{FFFD}'));

    // The server keeps answering afterwards.
    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_nested_path_is_echoed_verbatim() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let res = common::client()
        .get(format!("http://{}/a/b/c", addr))
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();

    assert_eq!(json["request_details"]["endpoint"], "/a/b/c");

    shutdown.trigger();
}

#[tokio::test]
async fn test_response_is_two_space_indented() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    let text = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(text.starts_with("{\n  \"request_details\": {"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_probe_sees_a_running_server() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    assert!(is_port_in_use("127.0.0.1", addr.port(), Duration::from_secs(1)).await);

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_accepting_connections() {
    let (addr, shutdown) = common::spawn_echo_server().await;

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let result = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await;
    assert!(result.is_err(), "listener should be closed after shutdown");
}

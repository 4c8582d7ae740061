//! Integration tests for the HTTP node client.
//!
//! These run against a local wiremock server and pin down the gateway
//! contract: endpoints, request bodies, and error mapping.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meridian_cli::client::{ClientError, HttpNodeClient, NodeClient};
use meridian_cli::core::types::{ChannelId, SigningKey};

fn test_channel() -> ChannelId {
    ChannelId::new("3a547668e859fb7b112a1e2dd7efcb739176ab8cfd1d9f224847fce362ebd99c").unwrap()
}

#[tokio::test]
async fn readonly_call_posts_to_the_readonly_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/readonly/submit"))
        .and(body_partial_json(json!({
            "channel_id": test_channel().as_str(),
            "call": {"function": "get", "parameters": [1, "two"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpNodeClient::new(server.uri(), test_channel());
    let value = client
        .readonly_call("get", vec![json!(1), json!("two")])
        .await
        .unwrap();
    assert_eq!(value, json!(42));
}

#[tokio::test]
async fn transaction_call_posts_channel_call_and_signer() {
    let server = MockServer::start().await;
    let key_hex = "ab".repeat(32);
    Mock::given(method("POST"))
        .and(path("/transaction/submit"))
        .and(body_partial_json(json!({
            "channel_id": test_channel().as_str(),
            "signer": key_hex.clone(),
            "on_behalf_of": "deadbeef",
            "call": {"function": "set", "parameters": [true]}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"receipt": "0xfeed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpNodeClient::new(server.uri(), test_channel())
        .with_signing_key(SigningKey::new(key_hex.clone()).unwrap())
        .with_on_behalf_of("deadbeef");
    let value = client
        .transaction_call("set", vec![json!(true)])
        .await
        .unwrap();
    assert_eq!(value, json!({"receipt": "0xfeed"}));
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/readonly/submit"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unknown channel"))
        .mount(&server)
        .await;

    let client = HttpNodeClient::new(server.uri(), test_channel());
    let err = client.readonly_call("get", vec![]).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::ApiError {
            status: 422,
            message: "unknown channel".into(),
        }
    );
}

#[tokio::test]
async fn non_json_success_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/readonly/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpNodeClient::new(server.uri(), test_channel());
    let err = client.readonly_call("get", vec![]).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // nothing listens on this port
    let client = HttpNodeClient::new("http://127.0.0.1:9", test_channel());
    let err = client.readonly_call("get", vec![]).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

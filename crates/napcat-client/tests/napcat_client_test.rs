//! Integration tests for [`napcat_client::NapcatClient`] against a mock NapCat server.
//!
//! Covers request shape (path, body, headers), success and failure replies, and transport errors.

use mockito::Matcher;
use napcat_client::{NapcatClient, ReactionGateway, ReactionRequest, SET_MSG_EMOJI_LIKE_PATH};
use serde_json::json;

fn request(token: Option<&str>) -> ReactionRequest {
    ReactionRequest::set_like("group-1", "1", "76", token.map(String::from))
}

/// **Test: OK reply applies the reaction; body and content type match the gateway contract.**
#[tokio::test]
async fn ok_reply_is_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .match_header("content-type", "application/json")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"message_id": "1", "emoji_id": "76", "set": true})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","message":"done"}"#)
        .create_async()
        .await;

    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&request(None)).await;

    mock.assert_async().await;
    assert!(outcome.success);
    assert_eq!(outcome.message, "done");
}

/// **Test: Configured token is sent verbatim as Authorization (no Bearer prefix).**
#[tokio::test]
async fn token_sent_as_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .match_header("authorization", "secret-token")
        .with_status(200)
        .with_body(r#"{"status":"ok","message":""}"#)
        .create_async()
        .await;

    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&request(Some("secret-token"))).await;

    mock.assert_async().await;
    assert!(outcome.success);
}

/// **Test: Empty token means no Authorization header.**
#[tokio::test]
async fn empty_token_not_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"status":"ok","message":"done"}"#)
        .create_async()
        .await;

    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&request(Some(""))).await;

    mock.assert_async().await;
    assert!(outcome.success);
}

/// **Test: Non-ok status is a failure carrying the server message.**
#[tokio::test]
async fn failed_status_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .with_status(200)
        .with_body(r#"{"status":"failed","retcode":1200,"message":"消息不存在"}"#)
        .create_async()
        .await;

    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&request(None)).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "消息不存在");
}

/// **Test: Unparsable body is a failure with error detail, regardless of HTTP status.**
#[tokio::test]
async fn non_json_body_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&request(None)).await;

    assert!(!outcome.success);
    assert!(outcome.message.starts_with("贴表情失败"));
    assert!(outcome.message.contains("JsonParseError"));
}

/// **Test: Connection refused is converted to a failure outcome, not an error.**
#[tokio::test]
async fn connection_refused_is_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = NapcatClient::new("127.0.0.1", port);
    let outcome = client.set_msg_emoji_like(&request(None)).await;

    assert!(!outcome.success);
    assert!(outcome.message.starts_with("贴表情失败"));
    assert!(outcome.message.contains("ConnectError"));
}

/// **Test: Removing a reaction sends set=false.**
#[tokio::test]
async fn unset_sends_false() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", SET_MSG_EMOJI_LIKE_PATH)
        .match_body(Matcher::Json(json!({"message_id": "1", "emoji_id": "76", "set": false})))
        .with_status(200)
        .with_body(r#"{"status":"ok","message":"removed"}"#)
        .create_async()
        .await;

    let mut req = request(None);
    req.set = false;
    let client = NapcatClient::with_base_url(server.url());
    let outcome = client.set_msg_emoji_like(&req).await;

    mock.assert_async().await;
    assert_eq!(outcome.message, "removed");
}

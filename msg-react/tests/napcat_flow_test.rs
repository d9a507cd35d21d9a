//! End-to-end test of the reaction flow against a mock NapCat server, plus plugin wiring.

mod common;

use std::sync::Arc;

use common::{message, tool_use_registry, Harness, ScriptedInvoker};
use mockito::Matcher;
use msg_react::{MessageReactPlugin, PluginConfig, MSG_REACT_ACTION_NAME, PLUGIN_NAME};
use napcat_client::NapcatClient;
use react_core::{ActionContext, ActivationType, Chat, Plugin};
use serde_json::json;

/// **Test: Action posts the selection to /set_msg_emoji_like with the token and reports 点赞.**
#[tokio::test]
async fn reaction_reaches_napcat() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/set_msg_emoji_like")
        .match_header("authorization", "napcat-token")
        .match_body(Matcher::Json(
            json!({"message_id": "1", "emoji_id": "76", "set": true}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","message":"done"}"#)
        .create_async()
        .await;

    let h = Harness::new(
        vec![message("1", "A", "hi", 1)],
        ScriptedInvoker::replying(r#"{"message_id":"1","emoji_id":"76"}"#),
    );
    let mut config = PluginConfig::default();
    config.napcat.token = "napcat-token".to_string();
    let action = h
        .action(config, tool_use_registry())
        .with_gateway(Arc::new(NapcatClient::with_base_url(server.url())));

    let plugin = MessageReactPlugin::new(PluginConfig::default(), action);
    let found = plugin.find_action(MSG_REACT_ACTION_NAME).unwrap();
    let outcome = found
        .execute(&ActionContext::new(Chat::group("group-1"), "think-1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(outcome.success);
    assert_eq!(outcome.message, "反应表情：贴在了消息ID=1上，表情是=点赞");
    assert_eq!(h.recorder.records().len(), 1);
}

/// **Test: Unreachable NapCat does not fail the action; the record is still stored.**
#[tokio::test]
async fn unreachable_napcat_is_not_fatal() {
    let h = Harness::new(
        vec![message("1", "A", "hi", 1)],
        ScriptedInvoker::replying(r#"{"message_id":"1","emoji_id":"76"}"#),
    );
    let action = h
        .action(PluginConfig::default(), tool_use_registry())
        .with_gateway(Arc::new(NapcatClient::with_base_url("http://127.0.0.1:1")));

    let plugin = MessageReactPlugin::new(PluginConfig::default(), action);
    let outcome = plugin.components()[0]
        .execute(&ActionContext::new(Chat::group("group-1"), "think-1"))
        .await
        .unwrap();

    assert!(outcome.success);
    assert_eq!(h.recorder.records().len(), 1);
}

/// **Test: Plugin exposes one always-active parallel action and follows the enabled flag.**
#[test]
fn plugin_registration() {
    let h = Harness::new(Vec::new(), ScriptedInvoker::replying("{}"));
    let mut config = PluginConfig::default();
    let plugin = MessageReactPlugin::new(config.clone(), h.action(config.clone(), tool_use_registry()));

    assert_eq!(plugin.name(), PLUGIN_NAME);
    assert!(plugin.enabled());
    let components = plugin.components();
    assert_eq!(components.len(), 1);
    let info = components[0].info();
    assert_eq!(info.name, MSG_REACT_ACTION_NAME);
    assert_eq!(info.activation_type, ActivationType::Always);
    assert!(info.parallel_action);
    assert!(plugin.find_action("reply").is_none());

    config.plugin.enabled = false;
    let disabled = MessageReactPlugin::new(config.clone(), h.action(config, tool_use_registry()));
    assert!(!disabled.enabled());
}

//! # NapCat gateway client
//!
//! Applies (or removes) an emoji reaction on a chat message through the NapCat HTTP endpoint
//! `POST /set_msg_emoji_like`. Every failure is reported as a [`GatewayOutcome`] with
//! `success = false` and a descriptive message; nothing here returns `Err` to the caller.
//!
//! ## External interactions
//!
//! - **NapCat**: `POST http://{host}:{port}/set_msg_emoji_like`, JSON body
//!   `{"message_id", "emoji_id", "set"}`, optional raw `Authorization: <token>` header.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

/// Path of the reaction endpoint on the gateway.
pub const SET_MSG_EMOJI_LIKE_PATH: &str = "/set_msg_emoji_like";

/// One reaction call. Built per invocation and dropped once the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRequest {
    /// Only used for logging; the gateway identifies the chat from the message id.
    pub chat_id: String,
    pub message_id: String,
    pub emoji_id: String,
    /// `true` adds the reaction, `false` removes it.
    pub set: bool,
    pub token: Option<String>,
}

impl ReactionRequest {
    /// Request that adds `emoji_id` to `message_id`.
    pub fn set_like(
        chat_id: impl Into<String>,
        message_id: impl Into<String>,
        emoji_id: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id: message_id.into(),
            emoji_id: emoji_id.into(),
            set: true,
            token,
        }
    }
}

/// Gateway result: success flag plus the server message or an error description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOutcome {
    pub success: bool,
    pub message: String,
}

impl GatewayOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    fn error(error_type: &str, error_message: impl std::fmt::Display) -> Self {
        Self::fail(format!(
            "贴表情失败 {{error_type: {}, error_message: {}}}",
            error_type, error_message
        ))
    }
}

/// Reaction gateway interface; lets callers swap NapCat for a test double.
#[async_trait]
pub trait ReactionGateway: Send + Sync {
    async fn set_msg_emoji_like(&self, request: &ReactionRequest) -> GatewayOutcome;
}

#[derive(Serialize)]
struct SetMsgEmojiLikeBody<'a> {
    message_id: &'a str,
    emoji_id: &'a str,
    set: bool,
}

/// NapCat HTTP client. Holds one pooled `reqwest::Client`; connections are released when the
/// response is consumed or dropped, on every exit path.
#[derive(Clone)]
pub struct NapcatClient {
    http: reqwest::Client,
    base_url: String,
}

impl NapcatClient {
    /// Client for `http://{host}:{port}`.
    pub fn new(host: &str, port: u16) -> Self {
        Self::with_base_url(format!("http://{}:{}", host, port))
    }

    /// Client for an explicit base URL (e.g. a mock server); trailing slashes are ignored.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Reads `status == "ok"` and `message` from a gateway reply; non-object bodies are rejected.
fn parse_gateway_reply(body: &str) -> GatewayOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return GatewayOutcome::error("JsonParseError", e),
    };
    let Some(obj) = value.as_object() else {
        return GatewayOutcome::error("UnexpectedResponse", "expected a JSON object");
    };
    let success = obj.get("status").and_then(Value::as_str) == Some("ok");
    let message = match obj.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => body.to_string(),
        Some(other) => other.to_string(),
    };
    GatewayOutcome { success, message }
}

fn transport_error_type(e: &reqwest::Error) -> &'static str {
    if e.is_connect() {
        "ConnectError"
    } else if e.is_timeout() {
        "TimeoutError"
    } else if e.is_body() || e.is_decode() {
        "BodyError"
    } else if e.is_request() {
        "RequestError"
    } else {
        "TransportError"
    }
}

#[async_trait]
impl ReactionGateway for NapcatClient {
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, message_id = %request.message_id, emoji_id = %request.emoji_id))]
    async fn set_msg_emoji_like(&self, request: &ReactionRequest) -> GatewayOutcome {
        let url = format!("{}{}", self.base_url, SET_MSG_EMOJI_LIKE_PATH);
        let body = SetMsgEmojiLikeBody {
            message_id: &request.message_id,
            emoji_id: &request.emoji_id,
            set: request.set,
        };

        let mut builder = self.http.post(&url).json(&body);
        if let Some(token) = request.token.as_deref().filter(|t| !t.is_empty()) {
            builder = builder.header(reqwest::header::AUTHORIZATION, token);
        }

        debug!(url = %url, set = request.set, "sending msg emoji like");

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                let kind = transport_error_type(&e);
                error!(error_type = kind, error = %e, "set_msg_emoji_like request failed");
                return GatewayOutcome::error(kind, e);
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                let kind = transport_error_type(&e);
                error!(error_type = kind, error = %e, "set_msg_emoji_like body read failed");
                return GatewayOutcome::error(kind, e);
            }
        };
        debug!(http_status = %status, body = %text, "set_msg_emoji_like response");

        let outcome = parse_gateway_reply(&text);
        if !outcome.success {
            warn!(http_status = %status, message = %outcome.message, "gateway did not apply reaction");
        }
        outcome
    }
}

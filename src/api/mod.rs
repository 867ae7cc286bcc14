//! Request body types for the HTTP surface
//!
//! Structural validation happens in the axum `Json` extractor: a body with
//! missing or mistyped required fields is rejected before any outbound call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body carrying only a bot token (validate, commands)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

/// Body for `POST /api/telegram/send`
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageBody {
    pub token: String,
    pub chat_id: String,
    pub text: String,
    #[serde(default)]
    pub parse_mode: Option<String>,
    #[serde(default)]
    pub disable_web_page_preview: Option<bool>,
    #[serde(default)]
    pub disable_notification: Option<bool>,
}

/// Outbound `sendMessage` parameters.
///
/// Optional fields are omitted entirely when absent; the Bot API treats a
/// missing key differently from an explicit null.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageParams {
    pub chat_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl SendMessageBody {
    /// Split into the credential and the outbound parameter mapping
    pub fn into_params(self) -> (String, SendMessageParams) {
        let params = SendMessageParams {
            chat_id: self.chat_id,
            text: self.text,
            parse_mode: self.parse_mode,
            disable_web_page_preview: self.disable_web_page_preview,
            disable_notification: self.disable_notification,
        };
        (self.token, params)
    }
}

/// Body for `POST /api/telegram/call` — arbitrary method passthrough
#[derive(Debug, Clone, Deserialize)]
pub struct CallMethodBody {
    pub token: String,
    pub method: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

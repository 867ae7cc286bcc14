//! One-shot Bot API method invocation

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};

use super::CallError;
use crate::config::TelegramConfig;

/// Client for Bot API method invocations.
///
/// Holds a reqwest client carrying the fixed outbound timeout; cloning is
/// cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
}

impl TelegramClient {
    /// Build a client from the Telegram section of the configuration
    pub fn new(config: &TelegramConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_base: config.base_url().to_string(),
        })
    }

    fn method_url(&self, token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, token, method)
    }

    /// Invoke one Bot API method and normalize the outcome.
    ///
    /// Issues exactly one outbound POST with `params` as the JSON body; no
    /// retries. The token never reaches the logs or the returned error
    /// strings.
    ///
    /// A decoded body with `ok: true` is returned whole. Everything else is
    /// a [`CallError`]: not-ok bodies, remote error statuses (body decoded
    /// when possible, synthesized otherwise), and transport failures.
    pub async fn call<P>(&self, token: &str, method: &str, params: &P) -> Result<Value, CallError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.method_url(token, method);

        tracing::debug!(method, "Calling Bot API");

        let response = self
            .http
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(transport_error)?;

        // Capture status and body inside this branch; the response is not
        // available once it has been consumed.
        if let Err(status_error) = response.error_for_status_ref() {
            let status = response.status().as_u16();
            let body = match response.json::<Value>().await {
                Ok(body) => body,
                Err(_) => json!({ "description": sanitize(status_error) }),
            };
            tracing::warn!(method, status, "Bot API returned error status");
            return Err(CallError::Status { status, body });
        }

        let data: Value = response.json().await.map_err(transport_error)?;

        if data.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            Ok(data)
        } else {
            tracing::warn!(method, "Bot API marked the call not-ok");
            Err(CallError::Rejected(data))
        }
    }
}

/// Stringify a reqwest error without its URL; the URL embeds the bot token.
fn sanitize(error: reqwest::Error) -> String {
    error.without_url().to_string()
}

fn transport_error(error: reqwest::Error) -> CallError {
    CallError::Transport(sanitize(error))
}

//! Route handlers: thin adapters from request bodies to Bot API calls
//!
//! Every Telegram handler follows the same shape: deserialize the body,
//! delegate to [`TelegramClient::call`], and relay the normalized result —
//! the success envelope verbatim, or the error descriptor with its status.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Map, Value};

use super::server::ProxyState;
use crate::api::{CallMethodBody, SendMessageBody, TokenBody};
use crate::diag;
use crate::telegram::CallError;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Telegram Bot → App backend is running" }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// Diagnostic status map: backend liveness, database collaborator state,
/// and presence checks for the database environment variables
pub async fn diagnostics() -> Json<Value> {
    Json(diag::report())
}

/// Validate a bot token and return the bot identity (getMe)
pub async fn validate_bot(
    State(state): State<ProxyState>,
    Json(body): Json<TokenBody>,
) -> Result<Json<Value>, CallError> {
    let data = state
        .telegram
        .call(&body.token, "getMe", &Map::new())
        .await?;
    Ok(Json(data))
}

/// Fetch the bot's registered commands (getMyCommands)
pub async fn get_my_commands(
    State(state): State<ProxyState>,
    Json(body): Json<TokenBody>,
) -> Result<Json<Value>, CallError> {
    let data = state
        .telegram
        .call(&body.token, "getMyCommands", &Map::new())
        .await?;
    Ok(Json(data))
}

/// Send a message (sendMessage); optional fields are omitted when absent
pub async fn send_message(
    State(state): State<ProxyState>,
    Json(body): Json<SendMessageBody>,
) -> Result<Json<Value>, CallError> {
    let (token, params) = body.into_params();
    let data = state.telegram.call(&token, "sendMessage", &params).await?;
    Ok(Json(data))
}

/// Generic Bot API passthrough: caller-supplied method and parameters
pub async fn call_method(
    State(state): State<ProxyState>,
    Json(body): Json<CallMethodBody>,
) -> Result<Json<Value>, CallError> {
    let data = state
        .telegram
        .call(&body.token, &body.method, &body.params)
        .await?;
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::proxy::{build_router, ProxyState};

    fn test_app() -> axum::Router {
        let config = AppConfig::default();
        build_router(ProxyState::new(config).unwrap())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_message() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Telegram Bot → App backend is running");
    }

    #[tokio::test]
    async fn test_hello_message() {
        let response = test_app()
            .oneshot(Request::get("/api/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Hello from the backend API!");
    }

    #[tokio::test]
    async fn test_diagnostics_shape() {
        let response = test_app()
            .oneshot(Request::get("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["backend"], "✅ Running");
        assert_eq!(body["connection_status"], "Not Connected");
        assert!(body["collections"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_is_client_error() {
        let response = test_app()
            .oneshot(
                Request::post("/api/telegram/validate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_send_requires_text() {
        let response = test_app()
            .oneshot(
                Request::post("/api/telegram/send")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"token": "123:abc", "chat_id": "42"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_cors_preflight_mirrors_origin() {
        let response = test_app()
            .oneshot(
                Request::options("/api/telegram/send")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap()
                .to_str()
                .unwrap(),
            "http://example.com"
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap()
                .to_str()
                .unwrap(),
            "true"
        );
    }
}

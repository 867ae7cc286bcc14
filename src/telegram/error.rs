//! Normalized failures from Bot API invocations

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Outcome of a failed Bot API call.
///
/// Each variant maps onto the HTTP status surfaced to the caller; the body
/// carried here becomes the error descriptor the caller receives verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The API answered 2xx but marked the call not-ok
    #[error("Bot API rejected the call")]
    Rejected(Value),

    /// The API answered with an error status
    #[error("Bot API returned status {status}")]
    Status { status: u16, body: Value },

    /// The call never produced a usable response (connect failure, timeout,
    /// DNS failure, undecodable body)
    #[error("transport failure: {0}")]
    Transport(String),
}

impl CallError {
    /// HTTP status surfaced to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallError::Rejected(_) => StatusCode::BAD_REQUEST,
            CallError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            CallError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Error descriptor returned as the response body
    pub fn into_body(self) -> Value {
        match self {
            CallError::Rejected(body) => body,
            CallError::Status { body, .. } => body,
            CallError::Transport(description) => json!({ "description": description }),
        }
    }
}

impl IntoResponse for CallError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_maps_to_400_with_remote_body() {
        let remote = json!({"ok": false, "error_code": 401, "description": "Unauthorized"});
        let err = CallError::Rejected(remote.clone());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_body(), remote);
    }

    #[test]
    fn test_status_propagates_remote_status() {
        let err = CallError::Status {
            status: 403,
            body: json!({"description": "Forbidden"}),
        };
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.into_body(), json!({"description": "Forbidden"}));
    }

    #[test]
    fn test_invalid_status_falls_back_to_502() {
        let err = CallError::Status {
            status: 99,
            body: json!({}),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_transport_synthesizes_descriptor() {
        let err = CallError::Transport("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.into_body(),
            json!({"description": "connection refused"})
        );
    }
}

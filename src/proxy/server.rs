//! Router construction and server startup

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::AppConfig;
use crate::telegram::TelegramClient;

/// Shared state for the proxy, constructed once at startup
#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<AppConfig>,
    pub telegram: TelegramClient,
}

impl ProxyState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let telegram = TelegramClient::new(&config.telegram)?;
        Ok(Self {
            config: Arc::new(config),
            telegram,
        })
    }
}

/// Permissive CORS for browser callers.
///
/// The CORS spec forbids `Access-Control-Allow-Credentials: true` together
/// with wildcard origins/methods/headers, so the allow-everything policy is
/// expressed by mirroring whatever the request asks for.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router
pub fn build_router(state: ProxyState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/hello", get(routes::hello))
        .route("/test", get(routes::diagnostics))
        .route("/api/telegram/validate", post(routes::validate_bot))
        .route("/api/telegram/commands", post(routes::get_my_commands))
        .route("/api/telegram/send", post(routes::send_message))
        .route("/api/telegram/call", post(routes::call_method))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the proxy server
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let api_base = config.telegram.base_url().to_string();
    let state = ProxyState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("telegram-proxy listening on {}", addr);
    tracing::info!("Proxying to {}", api_base);

    Ok(axum::serve(listener, app).await?)
}

//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::{HubHandle, TranslateTextUseCase};

use super::{
    handler::{health_check, translate, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Chat + translation server
///
/// # Example
///
/// ```ignore
/// let (hub, _dispatcher) = HubDispatcher::new(repository, message_pusher, clock).spawn();
/// let server = Server::new(hub, translate_text_usecase);
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// Hub のディスパッチャへの送信口
    hub: HubHandle,
    /// TranslateTextUseCase（翻訳のユースケース）
    translate_text_usecase: Arc<TranslateTextUseCase>,
}

impl Server {
    pub fn new(hub: HubHandle, translate_text_usecase: Arc<TranslateTextUseCase>) -> Self {
        Self {
            hub,
            translate_text_usecase,
        }
    }

    /// Build the router with every endpoint and middleware attached
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            hub: self.hub.clone(),
            translate_text_usecase: self.translate_text_usecase.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/translate", post(translate))
            .route("/api/health", get(health_check))
            .with_state(app_state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Bilingo server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

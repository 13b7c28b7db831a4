//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::{
    handler::{get_lottery, get_room_detail, get_rooms, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
    static_site::StaticSite,
};

/// Room relay and lottery server
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(room_repository, lottery_repository, message_pusher, policy);
/// let server = Server::new(state, StaticSite::new("public", SiteLayout::Spa));
/// server.run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// Shared application state (use cases)
    app_state: Arc<AppState>,
    /// Static front-end files
    static_site: StaticSite,
}

impl Server {
    /// Create a new Server instance
    pub fn new(app_state: AppState, static_site: StaticSite) -> Self {
        Self {
            app_state: Arc::new(app_state),
            static_site,
        }
    }

    /// Build the router: WebSocket gateway, HTTP API and static site.
    pub fn router(self) -> Router {
        let api = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .route("/api/lottery", get(get_lottery))
            .with_state(self.app_state);

        self.static_site
            .attach(api)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

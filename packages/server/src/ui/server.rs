//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::ServerConfig, usecase::SweepInactiveParticipantsUseCase};

use super::{
    handler::{
        delete_message, edit_message, get_messages, health_check, list_participants,
        post_message, refresh_status, register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::spawn_sweeper,
};

/// Build the HTTP router for the given state.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/participants",
            post(register_participant).get(list_participants),
        )
        .route("/messages", post(post_message).get(get_messages))
        .route("/messages/{id}", put(edit_message).delete(delete_message))
        .route("/status", post(refresh_status))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// HTTP chat server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(config, app_state, sweep_usecase);
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    app_state: Arc<AppState>,
    /// SweepInactiveParticipantsUseCase（非アクティブ参加者スイープのユースケース）
    sweep_usecase: Arc<SweepInactiveParticipantsUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `config` - Bind address and sweep timing
    /// * `app_state` - Use cases shared by the HTTP handlers
    /// * `sweep_usecase` - UseCase run periodically by the sweeper
    pub fn new(
        config: ServerConfig,
        app_state: Arc<AppState>,
        sweep_usecase: Arc<SweepInactiveParticipantsUseCase>,
    ) -> Self {
        Self {
            config,
            app_state,
            sweep_usecase,
        }
    }

    /// Run the chat server until a shutdown signal is received
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address or
    /// if there's an error during server execution.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = build_router(self.app_state);

        // Bind the server to the host and port
        let bind_addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the sweeper
        let sweeper = spawn_sweeper(self.sweep_usecase, self.config.sweep_interval)?;
        tracing::info!(
            "Sweeping every {:?}, evicting after {:?} without heartbeat",
            self.config.sweep_interval,
            self.config.inactivity_timeout
        );

        // Start the server
        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        sweeper.abort();
        served?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

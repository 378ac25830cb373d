//! Board server
//!
//! Hosts one kanban board session for a local browser front end.
//! REST API and Socket.IO share a single listener.

mod config;
mod routes;
mod session;
mod socket;
mod state;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::socket::{create_socket_layer, SocketState};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "board_server=debug,board_core=debug,tower_http=debug,socketioxide=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!("Starting board from {} seed", config.seed);

    let app_state = AppState::new(config.seed);

    let socket_state = SocketState::new(app_state.board().clone());
    let (socket_layer, _io) = create_socket_layer(socket_state);

    let cors = if config.cors_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Layers are applied bottom-to-top, so CorsLayer is added last to be applied first
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::board::router())
        .with_state(app_state)
        .layer(socket_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Board server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

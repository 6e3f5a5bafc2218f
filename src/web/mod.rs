pub mod forms;
pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::youtube::{VideoApi, YouTubeClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: Arc<dyn VideoApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, api: Arc<dyn VideoApi>) -> Self {
        Self {
            config: Arc::new(config),
            api,
        }
    }
}

/// Start the web server and run until the process is stopped.
///
/// # Errors
///
/// Returns an error if the API client cannot be built or the server fails to
/// bind.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let client = YouTubeClient::new(&config).context("Failed to build YouTube API client")?;
    let state = AppState::new(config, Arc::new(client));

    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Gateway server for appdock.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::{AppdockError, Result};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// HTTP server hosting the upload-and-serve gateway.
pub struct GatewayServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    state: Arc<AppState>,
}

impl GatewayServer {
    /// Create a new gateway server from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|_| {
                AppdockError::Config(format!(
                    "invalid server address {}:{}",
                    config.server.host, config.server.port
                ))
            })?;

        let state = AppState::from_config(&config.storage)?;

        Ok(Self {
            addr,
            state: Arc::new(state),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> axum::Router {
        create_router(self.state.clone())
            .merge(create_health_router())
            .layer(CompressionLayer::new())
    }

    /// Run the gateway server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Gateway listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Gateway listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Gateway server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{PortalError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PortalError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `config_path` (or the environment) and serve
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path).await?;
    run_with_config(config).await
}

/// Serve with an already loaded configuration
pub async fn run_with_config(config: Config) -> Result<()> {
    info!("Starting Hayat portal");

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());

    server.start().await
}

use tracing::info;

use appdock::{Config, GatewayServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = appdock::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        appdock::logging::init_console_only(&config.logging.level);
    }

    info!("appdock - upload-and-serve gateway");
    info!("Applications root: {}", config.storage.apps_dir);

    let server = match GatewayServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start gateway: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Gateway server error: {e}");
        std::process::exit(1);
    }
}

//! RSVP API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p rsvp-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use rsvp_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage,
        port = config.api.port,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = rsvp_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

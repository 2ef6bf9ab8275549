//! CLI command implementations
//!
//! The serve command loads configuration, builds the store and service,
//! then runs the HTTP server on a dedicated tokio runtime.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::domain::PlanetService;
use crate::http::{HttpServer, ServerConfig};
use crate::store::{seed, InMemoryPlanetStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse command line arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, seed } => serve(config.as_deref(), port, seed),
    }
}

/// Start the catalog HTTP server
pub fn serve(config_path: Option<&Path>, port: Option<u16>, seed_catalog: bool) -> CliResult<()> {
    init_tracing();

    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    validate(&config)?;

    let store = InMemoryPlanetStore::new();
    if seed_catalog {
        let count = seed::seed(&store)
            .map_err(|e| CliError::startup(format!("Failed to seed catalog: {}", e)))?;
        info!(count, "seeded starter catalog");
    }

    let service = PlanetService::new(store);
    let server = HttpServer::with_config(config, service);

    // Run the async server from the synchronous CLI
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::startup(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::startup(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load configuration from a file, or fall back to the defaults
fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    let Some(path) = path else {
        return Ok(ServerConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let config = serde_json::from_str(&content)
        .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Validate configuration before binding
fn validate(config: &ServerConfig) -> CliResult<()> {
    if config.port == 0 {
        return Err(CliError::config("port must be non-zero"));
    }
    if config.socket_addr().parse::<SocketAddr>().is_err() {
        return Err(CliError::config(format!(
            "Invalid bind address: {}",
            config.socket_addr()
        )));
    }

    Ok(())
}

/// Install the tracing subscriber, honoring RUST_LOG when set
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("planet_api=info,tower_http=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

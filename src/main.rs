// ============================================================================
// DEVOPS INFO SERVICE
// ============================================================================

// - GET /        service, host, runtime and request metadata
// - GET /health  liveness probe
// - JSON 404 for everything else
// - HOST / PORT / DEBUG from the environment (or .env)
// - Structured logging

mod client;
mod config;
mod dto;
mod errors;
mod routes;
mod states;
mod system;
mod uptime;

use std::{fmt, io, net::SocketAddr, process};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{Config, ConfigError, DEFAULT_LOG_FILTER};
use dto::{Endpoint, SERVICE_NAME};
pub use states::AppState;

#[derive(Debug)]
enum StartupError {
    Config(ConfigError),
    Bind(String, io::Error),
    Serve(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "Invalid configuration: {}", e),
            StartupError::Bind(addr, e) => write!(f, "Failed to bind {}: {}", addr, e),
            StartupError::Serve(e) => write!(f, "Server failed: {}", e),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Initialize logging: RUST_LOG wins, then DEBUG, then info
    let default_filter = config
        .as_ref()
        .map(Config::default_log_filter)
        .unwrap_or(DEFAULT_LOG_FILTER);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(StartupError::Config(e)),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let state = AppState::new();
    let app = routes::create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::Bind(addr.clone(), e))?;

    info!("Starting {} on http://{}", SERVICE_NAME, addr);
    info!("API Endpoints:");
    for endpoint in Endpoint::catalog() {
        info!("  {:<6} {:<8} - {}", endpoint.method, endpoint.path, endpoint.description);
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(StartupError::Serve)
}

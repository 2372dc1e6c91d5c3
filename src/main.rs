//! Attendance points HTTP server.
//!
//! Environment:
//!
//! - `ATTENDANCE_CONFIG_DIR`: directory holding `roster.yaml` and
//!   `points.yaml` (default `./config/default`)
//! - `ATTENDANCE_BIND_ADDR`: listen address (default `0.0.0.0:5000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use attendance_points::api::{AppState, create_router};
use attendance_points::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config_dir =
        env::var("ATTENDANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("ATTENDANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, config_dir = %config_dir, "Attendance server listening");
    axum::serve(listener, router).await?;

    Ok(())
}

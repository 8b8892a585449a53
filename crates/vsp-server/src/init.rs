//! Server initialization
//!
//! Loads configuration, installs logging, resolves every storage slot and
//! launches Rocket.

use std::net::IpAddr;
use std::path::Path;

use rocket::config::{Config as RocketConfig, LogLevel};
use tracing::info;
use vsp_domain::error::Error;
use vsp_infrastructure::config::{AppConfig, ConfigLoader, ServerConfig};
use vsp_infrastructure::di::init_app;
use vsp_infrastructure::logging::init_logging;

use crate::api::routes::api_rocket;
use crate::state::ApiState;

/// Run the VSP Host server
///
/// Slot resolution happens before the listener opens, so a binding that
/// names an unknown or ambiguous kind stops startup with that failure.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        slots = config.providers.len(),
        "Starting VSP Host server"
    );

    let rocket_config = rocket_config(&config.server)?;
    let context = init_app(config)?;
    let state = ApiState::from_context(&context);

    api_rocket(state)
        .configure(rocket_config)
        .launch()
        .await
        .map_err(|e| Error::internal(format!("Rocket launch failed: {}", e)))?;

    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> vsp_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Rocket configuration for the configured listener
pub fn rocket_config(server: &ServerConfig) -> vsp_domain::error::Result<RocketConfig> {
    let address: IpAddr = server.host.parse().map_err(|e| {
        Error::configuration_with_source(format!("Invalid server host '{}'", server.host), e)
    })?;
    Ok(RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Critical,
        ..RocketConfig::default()
    })
}

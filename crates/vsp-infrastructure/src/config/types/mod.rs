//! Configuration types

pub mod app;
pub mod logging;
pub mod server;

pub use app::{ApiConfig, AppConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;

//! # VSP Host - Infrastructure Layer
//!
//! Cross-cutting technical concerns:
//!
//! - [`config`] - figment-based configuration (TOML file + `VSP_` environment)
//! - [`logging`] - tracing subscriber setup
//! - [`error_ext`] - context helpers converting foreign errors into domain errors
//! - [`di`] - composition root and provider slot resolution
//! - [`infrastructure`] - admin port implementations

// Force-link vsp-providers to ensure linkme registrations are included
extern crate vsp_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

pub use config::AppConfig;
pub use di::{AppContext, ProviderSlots};

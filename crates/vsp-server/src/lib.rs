//! # VSP Host Server
//!
//! HTTP boundary for the VSP Host. Resolves the configured storage slots at
//! startup and exposes them through a small Rocket API.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/health` | GET | Liveness and bound slot count |
//! | `/config` | GET | Host identity, bindings and storage counters |
//! | `/providers` | GET | Registered storage provider kinds |
//! | `/slots/<slot>/collections` | GET | Collections held by one slot |
//!
//! Every failure reaching the boundary is rendered as an
//! [`api::error::ErrorResponse`] carrying the failure's status hint, or 500
//! when it has none.
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vsp_server::run(None).await
//! }
//! ```

// Force-link vsp-providers to ensure linkme registrations are included
extern crate vsp_providers;

pub mod api;
pub mod constants;
pub mod init;
pub mod state;

pub use api::routes::api_rocket;
pub use init::run;
pub use state::ApiState;

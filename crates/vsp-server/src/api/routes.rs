//! Rocket instance assembly

use rocket::{Build, Rocket, catchers, routes};

use super::error::default_catcher;
use super::handlers::{get_configuration, health, list_providers, list_slot_collections};
use crate::state::ApiState;

/// Build the API Rocket instance
///
/// Routes:
/// - GET /health - Liveness and bound slot count
/// - GET /config - Host identity, bindings and storage counters
/// - GET /providers - Registered storage providers
/// - GET /slots/<slot>/collections - Collections of one slot
pub fn api_rocket(state: ApiState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![health, get_configuration, list_providers, list_slot_collections],
        )
        .register("/", catchers![default_catcher])
}

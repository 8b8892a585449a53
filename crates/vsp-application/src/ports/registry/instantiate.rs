//! Dynamic instantiation
//!
//! Invokes a registry entry's factory with binding settings. Every failure
//! leaves this module as [`Error::Instantiation`] so callers can tell a
//! provider that failed to start apart from one that does not exist.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error};
use vsp_domain::error::{Error, Result};
use vsp_domain::value_objects::ProviderSettings;

use super::entry::ProviderEntry;

/// Construct a provider from its registry entry
///
/// # Errors
///
/// Returns [`Error::Instantiation`] when a required setting is missing, when
/// the factory fails or when the factory panics. Factory errors and the
/// panic message are both kept as the failure's source.
pub fn instantiate<C: ?Sized + 'static>(
    entry: &ProviderEntry<C>,
    settings: &ProviderSettings,
) -> Result<Arc<C>> {
    let missing: Vec<&str> = entry
        .required_settings
        .iter()
        .copied()
        .filter(|key| !settings.contains(key))
        .collect();
    if !missing.is_empty() {
        return Err(Error::instantiation(
            entry.kind,
            format!("missing required settings: {}", missing.join(", ")),
        ));
    }

    debug!(kind = entry.kind, module = entry.module, "Invoking provider factory");

    match panic::catch_unwind(AssertUnwindSafe(|| (entry.factory)(settings))) {
        Ok(Ok(instance)) => Ok(instance),
        Ok(Err(err)) if err.is_instantiation_failure() => Err(err),
        Ok(Err(err)) => Err(Error::instantiation_with_source(
            entry.kind,
            err.to_string(),
            err,
        )),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(kind = entry.kind, module = entry.module, %message, "Provider factory panicked");
            Err(Error::instantiation_with_source(
                entry.kind,
                format!("provider factory panicked: {}", message),
                FactoryPanic(message),
            ))
        }
    }
}

/// Panic raised inside a provider factory, carried as an error source
#[derive(Debug)]
pub struct FactoryPanic(pub String);

impl fmt::Display for FactoryPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factory panicked: {}", self.0)
    }
}

impl std::error::Error for FactoryPanic {}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

//! Domain-level constants

/// Status hint for client-caused failures that name something missing
pub const STATUS_NOT_FOUND: u16 = 404;

/// Status hint for malformed client input
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status hint for server-caused failures, and the boundary default
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Version of the configuration/metrics response schema
pub const SCHEMA_VERSION: &str = "1.0";

/// Slot name used when configuration declares no bindings
pub const DEFAULT_SLOT: &str = "default";

/// Provider kind bound to the default slot
pub const DEFAULT_PROVIDER_KIND: &str = "memory";

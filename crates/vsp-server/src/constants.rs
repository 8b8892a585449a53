//! Server constants

/// Message used when a failure carries an empty message
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Source identifier used when the caller supplies none
pub const DEFAULT_ERROR_SOURCE: &str = "vsp-server";

/// Status reported by the health endpoint
pub const HEALTHY_STATUS: &str = "healthy";

/// Host name reported when the OS refuses to tell
pub const UNKNOWN_HOST_NAME: &str = "localhost";

/// Replacement for redacted setting values
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Setting key fragments whose values are never exposed
pub const SECRET_KEY_MARKERS: &[&str] = &["secret", "password", "token", "key"];

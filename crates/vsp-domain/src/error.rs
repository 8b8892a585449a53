//! Error handling types
//!
//! Every variant of [`Error`] is response-aware: it can report the outward
//! status it would like to be rendered with through [`Error::status_hint`].
//! A missing hint lets the HTTP boundary pick its default.

use std::fmt;

use thiserror::Error;

use crate::constants::{STATUS_BAD_REQUEST, STATUS_INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause carried by wrapping variants
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Which side of the boundary caused a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The request or configuration named something invalid or missing
    Client,
    /// The deployment or a provider misbehaved
    Server,
}

/// Why a provider binding could not be resolved to a registered provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No registered provider declares the requested kind
    UnknownKind {
        /// Kinds that are registered for the contract
        available: Vec<String>,
    },
    /// More than one registered provider declares the requested kind
    AmbiguousKind {
        /// Declaring modules of every conflicting provider
        modules: Vec<String>,
    },
}

impl ResolutionFailure {
    /// Status hint matching the failure reason
    pub fn status_hint(&self) -> u16 {
        match self {
            Self::UnknownKind { .. } => STATUS_NOT_FOUND,
            Self::AmbiguousKind { .. } => STATUS_INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind { .. } => f.write_str("unknown provider kind"),
            Self::AmbiguousKind { .. } => f.write_str("ambiguous provider kind"),
        }
    }
}

/// Main error type for VSP Host
#[derive(Error, Debug)]
pub enum Error {
    /// Base response-aware failure
    #[error("{message}")]
    ResponseAware {
        /// Human-readable description
        message: String,
        /// Suggested outward status, `None` lets the boundary decide
        status_hint: Option<u16>,
        /// Optional wrapped cause
        #[source]
        source: Option<BoxedCause>,
    },

    /// A provider binding did not resolve to exactly one registered provider
    #[error("{message}")]
    ProviderResolution {
        /// Provider kind named by the binding
        kind: String,
        /// Why resolution failed
        reason: ResolutionFailure,
        /// Human-readable description
        message: String,
    },

    /// A matched provider could not be constructed
    #[error("Failed to instantiate provider '{kind}': {message}")]
    Instantiation {
        /// Provider kind being constructed
        kind: String,
        /// Description of the construction failure
        message: String,
        /// Original failure raised by the provider factory
        #[source]
        source: Option<BoxedCause>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedCause>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Storage provider operation error
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedCause>,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedCause>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Response-aware construction
impl Error {
    /// Create a response-aware failure with a message only
    pub fn response_aware<S: Into<String>>(message: S) -> Self {
        Self::ResponseAware {
            message: message.into(),
            status_hint: None,
            source: None,
        }
    }

    /// Create a response-aware failure with a status hint
    pub fn response_aware_with_status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::ResponseAware {
            message: message.into(),
            status_hint: Some(status),
            source: None,
        }
    }

    /// Create a response-aware failure with a status hint and a wrapped cause
    pub fn response_aware_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        status: u16,
        source: E,
    ) -> Self {
        Self::ResponseAware {
            message: message.into(),
            status_hint: Some(status),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap an unclassified failure, leaving the status to the boundary
    pub fn wrap<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        cause: E,
    ) -> Self {
        Self::ResponseAware {
            message: message.into(),
            status_hint: None,
            source: Some(Box::new(cause)),
        }
    }
}

// Provider resolution and instantiation
impl Error {
    /// Binding names a kind no registered provider declares
    pub fn unknown_provider_kind<S: Into<String>>(kind: S, available: Vec<String>) -> Self {
        let kind = kind.into();
        let message = format!(
            "Unknown provider kind '{}'. Available providers: {:?}",
            kind, available
        );
        Self::ProviderResolution {
            kind,
            reason: ResolutionFailure::UnknownKind { available },
            message,
        }
    }

    /// Binding names a kind declared by several registered providers
    pub fn ambiguous_provider_kind<S: Into<String>>(kind: S, modules: Vec<String>) -> Self {
        let kind = kind.into();
        let message = format!(
            "Ambiguous provider kind '{}': {} providers claim it ({})",
            kind,
            modules.len(),
            modules.join(", ")
        );
        Self::ProviderResolution {
            kind,
            reason: ResolutionFailure::AmbiguousKind { modules },
            message,
        }
    }

    /// Create an instantiation error
    pub fn instantiation<K: Into<String>, S: Into<String>>(kind: K, message: S) -> Self {
        Self::Instantiation {
            kind: kind.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an instantiation error wrapping the factory's failure
    pub fn instantiation_with_source<
        K: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        kind: K,
        message: S,
        source: E,
    ) -> Self {
        Self::Instantiation {
            kind: kind.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Ambient error construction
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Outward rendering hints
impl Error {
    /// Suggested outward status, `None` when the boundary should decide
    pub fn status_hint(&self) -> Option<u16> {
        match self {
            Self::ResponseAware { status_hint, .. } => *status_hint,
            Self::ProviderResolution { reason, .. } => Some(reason.status_hint()),
            Self::Instantiation { .. } | Self::Configuration { .. } | Self::Internal { .. } => {
                Some(STATUS_INTERNAL_SERVER_ERROR)
            }
            Self::NotFound { .. } => Some(STATUS_NOT_FOUND),
            Self::InvalidArgument { .. } => Some(STATUS_BAD_REQUEST),
            Self::IoSimple { .. } | Self::Io { .. } | Self::Json { .. } | Self::Storage { .. } => {
                None
            }
        }
    }

    /// Side of the boundary that caused the failure, derived from the hint
    pub fn fault(&self) -> Option<Fault> {
        self.status_hint().map(|status| {
            if (400..500).contains(&status) {
                Fault::Client
            } else {
                Fault::Server
            }
        })
    }

    /// Whether this is a provider resolution failure
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::ProviderResolution { .. })
    }

    /// Whether this is an instantiation failure
    pub fn is_instantiation_failure(&self) -> bool {
        matches!(self, Self::Instantiation { .. })
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::response_aware(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::response_aware(s)
    }
}

//! Error types for engine assembly and component contracts.
//!
//! This module provides context-aware error types covering engine
//! configuration mistakes as well as failures surfaced by pluggable
//! components through the capability traits.

use thiserror::Error;

/// Core error types for engine assembly.
///
/// Configuration errors (`IncompleteConfiguration`, `Configuration`) are
/// programming mistakes detected while an engine is being defined; they are
/// never transient and must abort engine construction. Component errors
/// (`DataSource`, `Preparation`, `Prediction`, `Serving`) wrap failures
/// reported by pluggable implementations, which are opaque to this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors from component implementations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A mandatory slot was never assigned before `build()`.
    #[error("Incomplete configuration: {message}")]
    IncompleteConfiguration {
        /// Detailed error message
        message: String,
    },

    /// A component assignment is structurally invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Data source extraction errors.
    #[error("Data source error: {message}")]
    DataSource {
        /// Detailed error message
        message: String,
    },

    /// Training data preparation errors.
    #[error("Preparation error: {message}")]
    Preparation {
        /// Detailed error message
        message: String,
    },

    /// Algorithm prediction errors.
    #[error("Prediction error: {message}")]
    Prediction {
        /// Detailed error message
        message: String,
    },

    /// Serving/aggregation errors.
    #[error("Serving error: {message}")]
    Serving {
        /// Detailed error message
        message: String,
    },

    /// Resource not found errors.
    #[error("Not found: {resource}")]
    NotFound {
        /// Name of the missing resource
        resource: String,
    },

    /// Internal framework errors.
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },

    /// Generic errors from external dependencies.
    #[error("External error: {source}")]
    External {
        /// The underlying error
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Create a new incomplete-configuration error with a message.
    pub fn incomplete_configuration<S: Into<String>>(message: S) -> Self {
        Self::IncompleteConfiguration {
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new data source error with a message.
    pub fn data_source<S: Into<String>>(message: S) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Create a new preparation error with a message.
    pub fn preparation<S: Into<String>>(message: S) -> Self {
        Self::Preparation {
            message: message.into(),
        }
    }

    /// Create a new prediction error with a message.
    pub fn prediction<S: Into<String>>(message: S) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    /// Create a new serving error with a message.
    pub fn serving<S: Into<String>>(message: S) -> Self {
        Self::Serving {
            message: message.into(),
        }
    }

    /// Create a new not found error with a resource name.
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new internal error with a message.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a new external error from any error that implements `Into<anyhow::Error>`.
    pub fn external<E: Into<anyhow::Error>>(error: E) -> Self {
        Self::External {
            source: error.into(),
        }
    }

    /// Check if this error is an engine-definition mistake.
    ///
    /// Returns `true` for errors raised while assembling an engine. These
    /// are deterministic and non-transient; retrying never helps.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::IncompleteConfiguration { .. } | Self::Configuration { .. }
        )
    }

    /// Check if this error originated inside a pluggable component.
    ///
    /// Returns `true` for failures surfaced through one of the four
    /// capability traits rather than by the assembly core itself.
    #[must_use]
    pub fn is_component_error(&self) -> bool {
        matches!(
            self,
            Self::DataSource { .. }
                | Self::Preparation { .. }
                | Self::Prediction { .. }
                | Self::Serving { .. }
        )
    }
}

/// Convert from `anyhow::Error` to [`Error`].
impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Self::External { source: error }
    }
}

/// Result type alias for convenience.
///
/// This is the standard result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

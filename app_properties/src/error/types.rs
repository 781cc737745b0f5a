//! Primary error enum for resolution and properties handling.

use figment::Error as FigmentError;
use thiserror::Error;

use super::ResolutionFailure;

/// Errors that can occur while resolving resources or reading properties.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropertiesError {
    /// No candidate location produced a readable stream.
    #[error("{0}")]
    Resolution(Box<ResolutionFailure>),

    /// A resource exists but could not be opened or read.
    #[error("Resource error in '{location}': {source}")]
    File {
        /// Path or bundled resource name that triggered the failure.
        location: String,
        /// Underlying error reported while opening or reading.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Malformed `.properties` text.
    #[error("Invalid properties syntax at line {line}: {message}")]
    Parse {
        /// One-based line number where the problem starts.
        line: usize,
        /// Human-readable explanation of the syntax problem.
        message: String,
    },

    /// A `${...}` reference could not be expanded.
    #[error("Cannot interpolate '{key}': {message}")]
    Interpolation {
        /// Property whose value was being expanded.
        key: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Typed extraction of the properties failed.
    #[error("Failed to extract properties: {0}")]
    Extract(#[from] Box<FigmentError>),
}

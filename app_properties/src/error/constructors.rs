//! Constructors and conversions for `PropertiesError`.

use std::error::Error;
use std::sync::Arc;

use figment::Error as FigmentError;

use super::{PropertiesError, ResolutionFailure};

impl PropertiesError {
    /// Construct a [`PropertiesError::File`] for a path or resource name.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_properties::PropertiesError;
    ///
    /// let err = PropertiesError::file("conf/app.properties", std::io::Error::other("boom"));
    /// assert!(err.to_string().contains("conf/app.properties"));
    /// ```
    #[must_use]
    pub fn file(location: impl Into<String>, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            location: location.into(),
            source: err.into(),
        }
    }

    /// Wrap a [`ResolutionFailure`].
    #[must_use]
    pub fn resolution(failure: ResolutionFailure) -> Self {
        Self::Resolution(Box::new(failure))
    }

    /// Construct a parse error for the one-based `line`.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Construct an interpolation error for `key`.
    #[must_use]
    pub fn interpolation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Interpolation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the resolution diagnostics when this is a resolution failure.
    #[must_use]
    pub fn as_resolution(&self) -> Option<&ResolutionFailure> {
        match self {
            Self::Resolution(failure) => Some(&**failure),
            _ => None,
        }
    }

    /// Returns `true` when no candidate produced a readable stream.
    #[must_use]
    pub const fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

impl From<FigmentError> for PropertiesError {
    fn from(err: FigmentError) -> Self {
        Self::Extract(Box::new(err))
    }
}

impl From<ResolutionFailure> for PropertiesError {
    fn from(failure: ResolutionFailure) -> Self {
        Self::resolution(failure)
    }
}

impl From<ResolutionFailure> for Arc<PropertiesError> {
    fn from(failure: ResolutionFailure) -> Self {
        Self::new(PropertiesError::resolution(failure))
    }
}

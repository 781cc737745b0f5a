//! Diagnostic payload for failed resource resolution.

use std::fmt;

use camino::Utf8PathBuf;

use crate::resolver::Candidate;

/// Which lookup branch gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureKind {
    /// The property was set but its value matched no file or bundled resource.
    ConfiguredFileNotFound,
    /// The property was unset and the default file was not found anywhere.
    DefaultFileNotFound,
    /// The property was unset and no default file name was supplied.
    NothingToResolve,
    /// A properties file was not found in the configuration directory or
    /// among bundled resources.
    PropertiesFileNotFound,
}

/// Context describing why no candidate produced a stream.
///
/// Every candidate that was attempted is recorded in order, so callers can
/// report exactly where the resolver looked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    /// Branch that failed.
    pub kind: FailureKind,
    /// Property key consulted, if the lookup was keyed.
    pub key: Option<String>,
    /// Configured value or default file name that was searched for.
    pub file_name: Option<String>,
    /// Configuration directory observed for this call.
    pub conf_dir: Option<Utf8PathBuf>,
    /// Candidates tried, in order.
    pub attempted: Vec<Candidate>,
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or("<none>");
        let file = self.file_name.as_deref().unwrap_or("<none>");
        match self.kind {
            FailureKind::ConfiguredFileNotFound => write!(
                f,
                "file '{file}' configured by property '{key}' not found on the filesystem or among bundled resources"
            )?,
            FailureKind::DefaultFileNotFound => {
                write!(
                    f,
                    "property '{key}' is not set and default file '{file}' was not found"
                )?;
                match &self.conf_dir {
                    Some(dir) => write!(f, " (configuration directory: {dir})")?,
                    None => f.write_str(" (no configuration directory set)")?,
                }
            }
            FailureKind::NothingToResolve => write!(
                f,
                "property '{key}' is not set and no default file name was given"
            )?,
            FailureKind::PropertiesFileNotFound => write!(
                f,
                "properties file '{file}' not found in the configuration directory or among bundled resources"
            )?,
        }
        if !self.attempted.is_empty() {
            f.write_str("; tried: ")?;
            for (idx, candidate) in self.attempted.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{candidate}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ResolutionFailure {}

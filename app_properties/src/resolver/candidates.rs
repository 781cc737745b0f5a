//! Ordered lookup plans produced before any file is opened.

use std::fmt;

use camino::Utf8PathBuf;

use crate::{FailureKind, ResolutionFailure};

/// A single location the resolver will try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A filesystem path, relative to the working directory or absolute.
    Path(Utf8PathBuf),
    /// A resource name looked up in the [`crate::ResourceBundle`].
    Bundled(String),
    /// A file under the configuration directory.
    ConfDir(Utf8PathBuf),
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "path '{path}'"),
            Self::Bundled(name) => write!(f, "bundled '{name}'"),
            Self::ConfDir(path) => write!(f, "conf dir '{path}'"),
        }
    }
}

/// Which rule selected the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionBranch {
    /// The property holds a value: filesystem first, then bundled resources.
    Configured,
    /// The property is unset: bundled resources, working directory, then the
    /// configuration directory.
    Default,
    /// The property is unset and there is no default file name.
    Unspecified,
    /// Loading a properties file: configuration directory, then bundled
    /// resources.
    PropertiesFile,
}

impl ResolutionBranch {
    const fn failure_kind(self) -> FailureKind {
        match self {
            Self::Configured => FailureKind::ConfiguredFileNotFound,
            Self::Default => FailureKind::DefaultFileNotFound,
            Self::Unspecified => FailureKind::NothingToResolve,
            Self::PropertiesFile => FailureKind::PropertiesFileNotFound,
        }
    }
}

/// The full lookup the resolver would perform for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    /// Rule that selected the candidates.
    pub branch: ResolutionBranch,
    /// Property key consulted, if any.
    pub key: Option<String>,
    /// Configured value or default file name being searched for.
    pub file_name: Option<String>,
    /// Configuration directory observed when the plan was built.
    pub conf_dir: Option<Utf8PathBuf>,
    /// Locations in the order they are tried.
    pub candidates: Vec<Candidate>,
}

impl ResolutionPlan {
    /// Converts an exhausted plan into the error reported to callers.
    #[must_use]
    pub fn into_failure(self) -> ResolutionFailure {
        ResolutionFailure {
            kind: self.branch.failure_kind(),
            key: self.key,
            file_name: self.file_name,
            conf_dir: self.conf_dir,
            attempted: self.candidates,
        }
    }
}

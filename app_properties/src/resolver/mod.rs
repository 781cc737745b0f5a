//! Resolution of configuration resources named by a property or a default
//! file name.
//!
//! A configured value is trusted as a filesystem path first and only then
//! looked up as a bundled resource; it never falls back to the default file.
//! A default file name is looked up as a bundled resource first, then
//! relative to the working directory, then under the configuration
//! directory.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::fs_helpers::open_path;
use crate::{
    ConfDirSetting, Properties, PropertiesError, ResolveResult, ResourceBundle, ResourceOrigin,
    ResourceStream,
};

mod builder;
mod candidates;

pub use builder::ResourceResolverBuilder;
pub use candidates::{Candidate, ResolutionBranch, ResolutionPlan};

/// Turns property keys and default file names into open streams.
#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    bundle: ResourceBundle,
    conf_dir: ConfDirSetting,
    working_dir: Option<Utf8PathBuf>,
}

impl ResourceResolver {
    /// Creates a builder with an empty bundle and the default
    /// configuration-directory setting.
    #[must_use]
    pub fn builder() -> ResourceResolverBuilder {
        ResourceResolverBuilder::new()
    }

    /// Bundled resources consulted by this resolver.
    #[must_use]
    pub const fn bundle(&self) -> &ResourceBundle {
        &self.bundle
    }

    /// Source of the configuration directory.
    #[must_use]
    pub const fn conf_dir_setting(&self) -> &ConfDirSetting {
        &self.conf_dir
    }

    pub(crate) fn anchor(&self, path: &Utf8Path) -> Utf8PathBuf {
        match &self.working_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Lists the candidates [`Self::resolve`] would try, in order.
    ///
    /// The configuration directory is read when the plan is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use app_properties::{Candidate, ConfDirSetting, Properties, ResolutionBranch, ResourceResolver};
    ///
    /// let resolver = ResourceResolver::builder()
    ///     .conf_dir(ConfDirSetting::fixed("/etc/app"))
    ///     .build();
    /// let plan = resolver.plan(&Properties::new(), "jaas.file", Some("jaas.properties"));
    /// assert_eq!(plan.branch, ResolutionBranch::Default);
    /// assert_eq!(
    ///     plan.candidates,
    ///     vec![
    ///         Candidate::Bundled("jaas.properties".into()),
    ///         Candidate::Path("jaas.properties".into()),
    ///         Candidate::ConfDir("/etc/app/jaas.properties".into()),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn plan(
        &self,
        props: &Properties,
        key: &str,
        default_file: Option<&str>,
    ) -> ResolutionPlan {
        let conf_dir = self.conf_dir.current();
        if let Some(configured) = props.get_non_empty(key) {
            return ResolutionPlan {
                branch: ResolutionBranch::Configured,
                key: Some(key.to_owned()),
                file_name: Some(configured.to_owned()),
                conf_dir,
                candidates: vec![
                    Candidate::Path(self.anchor(Utf8Path::new(configured))),
                    Candidate::Bundled(configured.to_owned()),
                ],
            };
        }
        let Some(file) = default_file.map(str::trim).filter(|file| !file.is_empty()) else {
            return ResolutionPlan {
                branch: ResolutionBranch::Unspecified,
                key: Some(key.to_owned()),
                file_name: None,
                conf_dir,
                candidates: Vec::new(),
            };
        };
        let mut candidates = vec![
            Candidate::Bundled(file.to_owned()),
            Candidate::Path(self.anchor(Utf8Path::new(file))),
        ];
        if let Some(dir) = &conf_dir {
            candidates.push(Candidate::ConfDir(self.anchor(&dir.join(file))));
        }
        ResolutionPlan {
            branch: ResolutionBranch::Default,
            key: Some(key.to_owned()),
            file_name: Some(file.to_owned()),
            conf_dir,
            candidates,
        }
    }

    /// Opens the resource configured under `key`, or `default_file` when the
    /// property is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Resolution`] when no candidate exists, and
    /// [`PropertiesError::File`] when a candidate exists but cannot be
    /// opened.
    pub fn resolve(
        &self,
        props: &Properties,
        key: &str,
        default_file: Option<&str>,
    ) -> ResolveResult<ResourceStream> {
        self.execute(self.plan(props, key, default_file))
    }

    /// Tries each candidate of `plan` in order and returns the first stream.
    ///
    /// # Errors
    ///
    /// As for [`Self::resolve`].
    pub fn execute(&self, plan: ResolutionPlan) -> ResolveResult<ResourceStream> {
        for candidate in &plan.candidates {
            tracing::debug!(key = ?plan.key, %candidate, "trying resource candidate");
            if let Some(stream) = self.open_candidate(candidate)? {
                tracing::debug!(key = ?plan.key, origin = %stream.origin(), "resolved resource");
                return Ok(stream);
            }
        }
        let failure = plan.into_failure();
        tracing::warn!(error = %failure, "resource resolution failed");
        Err(failure.into())
    }

    fn open_candidate(&self, candidate: &Candidate) -> ResolveResult<Option<ResourceStream>> {
        let (path, under_conf_dir) = match candidate {
            Candidate::Bundled(name) => return self.bundle.open(name),
            Candidate::Path(path) => (path, false),
            Candidate::ConfDir(path) => (path, true),
        };
        let file = open_path(path)
            .map_err(|err| Arc::new(PropertiesError::file(path.as_str(), err)))?;
        Ok(file.map(|found| {
            let origin = if under_conf_dir {
                ResourceOrigin::ConfDir(path.clone())
            } else {
                ResourceOrigin::Filesystem(path.clone())
            };
            ResourceStream::from_file(origin, found)
        }))
    }
}

/// Resolves with a default [`ResourceResolver`]: no bundled resources and
/// the configuration directory taken from [`crate::CONF_DIR_ENV`].
///
/// # Errors
///
/// As for [`ResourceResolver::resolve`].
pub fn resolve_file(
    props: &Properties,
    key: &str,
    default_file: Option<&str>,
) -> ResolveResult<ResourceStream> {
    ResourceResolver::default().resolve(props, key, default_file)
}

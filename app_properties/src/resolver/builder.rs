//! Builder for [`ResourceResolver`].

use camino::Utf8PathBuf;

use super::ResourceResolver;
use crate::{ConfDirSetting, ResourceBundle};

/// Builder for [`ResourceResolver`].
///
/// # Examples
///
/// ```rust
/// use app_properties::{ConfDirSetting, ResourceBundle, ResourceResolver};
///
/// let resolver = ResourceResolver::builder()
///     .bundle(ResourceBundle::new().add_root("/opt/app/resources"))
///     .conf_dir(ConfDirSetting::env("MY_APP_CONF"))
///     .working_dir("/srv/my-app")
///     .build();
/// assert_eq!(resolver.conf_dir_setting(), &ConfDirSetting::env("MY_APP_CONF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceResolverBuilder {
    bundle: ResourceBundle,
    conf_dir: ConfDirSetting,
    working_dir: Option<Utf8PathBuf>,
}

impl ResourceResolverBuilder {
    /// Creates a builder with an empty bundle and the default
    /// configuration-directory setting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bundled resources.
    #[must_use]
    pub fn bundle(mut self, bundle: ResourceBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Adds a bundle root directory to the current bundle.
    #[must_use]
    pub fn add_bundle_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.bundle = self.bundle.add_root(root);
        self
    }

    /// Sets where the configuration directory comes from.
    #[must_use]
    pub fn conf_dir(mut self, setting: ConfDirSetting) -> Self {
        self.conf_dir = setting;
        self
    }

    /// Anchors relative paths at `dir` instead of the process working
    /// directory.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Finalises the resolver.
    #[must_use]
    pub fn build(self) -> ResourceResolver {
        ResourceResolver {
            bundle: self.bundle,
            conf_dir: self.conf_dir,
            working_dir: self.working_dir,
        }
    }
}

//! Loading application properties files.
//!
//! A properties file is read from the configuration directory when one is
//! set, and otherwise (or when it is missing there) from the bundled
//! resources.

use crate::resolver::{Candidate, ResolutionBranch, ResolutionPlan};
use crate::{Properties, ResolveResult, ResourceResolver};

/// File read by [`ResourceResolver::load_default_properties`].
pub const DEFAULT_PROPERTIES_FILE: &str = "application.properties";

impl ResourceResolver {
    /// Lists where [`Self::load_properties`] would look for `file_name`.
    #[must_use]
    pub fn properties_plan(&self, file_name: &str) -> ResolutionPlan {
        let conf_dir = self.conf_dir_setting().current();
        let mut candidates = Vec::with_capacity(2);
        if let Some(dir) = &conf_dir {
            candidates.push(Candidate::ConfDir(self.anchor(&dir.join(file_name))));
        }
        candidates.push(Candidate::Bundled(file_name.to_owned()));
        ResolutionPlan {
            branch: ResolutionBranch::PropertiesFile,
            key: None,
            file_name: Some(file_name.to_owned()),
            conf_dir,
            candidates,
        }
    }

    /// Reads and parses the properties file `file_name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use app_properties::{ConfDirSetting, ResourceBundle, ResourceResolver};
    ///
    /// # fn run() -> app_properties::ResolveResult<()> {
    /// let resolver = ResourceResolver::builder()
    ///     .bundle(ResourceBundle::new().embed("test.properties", b"jaas.properties.file=app-jaas.properties"))
    ///     .conf_dir(ConfDirSetting::Unset)
    ///     .build();
    /// let props = resolver.load_properties("test.properties")?;
    /// assert_eq!(props.get("jaas.properties.file"), Some("app-jaas.properties"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::PropertiesError::Resolution`] when the file is
    /// missing, [`crate::PropertiesError::File`] when it cannot be read as
    /// UTF-8 and [`crate::PropertiesError::Parse`] for malformed content.
    pub fn load_properties(&self, file_name: &str) -> ResolveResult<Properties> {
        let stream = self.execute(self.properties_plan(file_name))?;
        tracing::debug!(origin = %stream.origin(), "loading properties");
        Properties::parse(&stream.read_text()?)
    }

    /// Reads [`DEFAULT_PROPERTIES_FILE`].
    ///
    /// # Errors
    ///
    /// As for [`Self::load_properties`].
    pub fn load_default_properties(&self) -> ResolveResult<Properties> {
        self.load_properties(DEFAULT_PROPERTIES_FILE)
    }
}

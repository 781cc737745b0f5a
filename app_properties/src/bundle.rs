//! Resources located by name rather than by filesystem path.
//!
//! A [`ResourceBundle`] plays the role of an application classpath: names
//! are looked up first among resources compiled into the binary, then in
//! each registered root directory in registration order.

use std::collections::BTreeMap;
use std::sync::Arc;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

use crate::fs_helpers::{open_dir, open_in};
use crate::{PropertiesError, ResolveResult, ResourceOrigin, ResourceStream};

/// Named resources packaged with the application.
///
/// # Examples
///
/// ```
/// use app_properties::ResourceBundle;
///
/// let bundle = ResourceBundle::new().embed("app-jaas.properties", b"login=required");
/// assert!(bundle.contains("app-jaas.properties"));
/// assert!(bundle.contains("/app-jaas.properties"));
/// assert!(!bundle.contains("other.properties"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    embedded: BTreeMap<String, &'static [u8]>,
    roots: Vec<Utf8PathBuf>,
}

impl ResourceBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource compiled into the binary, typically with
    /// `include_bytes!`.
    ///
    /// The name is normalised as for [`Self::open`]; a name that could never
    /// be looked up (empty, or containing `..`) is skipped.
    #[must_use]
    pub fn embed(mut self, name: impl AsRef<str>, bytes: &'static [u8]) -> Self {
        let name = name.as_ref();
        match normalise_name(name) {
            Some(normalised) => {
                self.embedded.insert(normalised.into_string(), bytes);
            }
            None => tracing::debug!(name, "skipping embedded resource with invalid name"),
        }
        self
    }

    /// Registers a directory whose files are addressable by relative name.
    #[must_use]
    pub fn add_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Root directories in lookup order.
    #[must_use]
    pub fn roots(&self) -> &[Utf8PathBuf] {
        &self.roots
    }

    /// Returns `true` when [`Self::open`] would find `name`.
    ///
    /// Lookup errors count as absent.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        matches!(self.open(name), Ok(Some(_)))
    }

    /// Opens the resource called `name`.
    ///
    /// Leading `/` characters are ignored. Names containing `..` components
    /// never resolve, so a lookup cannot escape its root.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::File`] when a matching file exists in a root
    /// but cannot be opened.
    pub fn open(&self, name: &str) -> ResolveResult<Option<ResourceStream>> {
        let Some(normalised) = normalise_name(name) else {
            tracing::debug!(name, "ignoring invalid bundled resource name");
            return Ok(None);
        };
        if let Some(bytes) = self.embedded.get(normalised.as_str()) {
            return Ok(Some(ResourceStream::embedded(normalised.as_str(), *bytes)));
        }
        for root in &self.roots {
            if let Some(stream) = Self::open_in_root(root, &normalised)? {
                return Ok(Some(stream));
            }
        }
        Ok(None)
    }

    fn open_in_root(root: &Utf8Path, name: &Utf8Path) -> ResolveResult<Option<ResourceStream>> {
        let location = || root.join(name).into_string();
        let dir =
            open_dir(root).map_err(|err| Arc::new(PropertiesError::file(root.as_str(), err)))?;
        let Some(dir) = dir else {
            tracing::debug!(root = %root, "bundle root does not exist");
            return Ok(None);
        };
        let file = open_in(&dir, name)
            .map_err(|err| Arc::new(PropertiesError::file(location(), err)))?;
        Ok(file.map(|found| {
            let origin = ResourceOrigin::BundleRoot {
                root: root.to_path_buf(),
                name: name.as_str().to_owned(),
            };
            ResourceStream::from_file(origin, found)
        }))
    }
}

fn normalise_name(name: &str) -> Option<Utf8PathBuf> {
    let trimmed = Utf8Path::new(name.trim_start_matches('/'));
    let mut normalised = Utf8PathBuf::new();
    for component in trimmed.components() {
        match component {
            Utf8Component::Normal(part) => normalised.push(part),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return None;
            }
        }
    }
    (!normalised.as_str().is_empty()).then_some(normalised)
}

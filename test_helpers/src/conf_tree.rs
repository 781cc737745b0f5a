//! Temporary directory trees populated with configuration files.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory removed when dropped.
///
/// # Examples
///
/// ```
/// use test_helpers::conf_tree::ConfTree;
///
/// # fn run() -> anyhow::Result<()> {
/// let tree = ConfTree::new()?.with_file("conf/app-jaas.properties", "login=required")?;
/// assert!(tree.path("conf/app-jaas.properties").is_file());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfTree {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl ConfTree {
    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not UTF-8.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("create temporary tree")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("temporary tree path is not UTF-8: {}", path.display()))?;
        Ok(Self { _temp: temp, root })
    }

    /// Root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(
        &self,
        relative: impl AsRef<Utf8Path>,
        contents: impl AsRef<[u8]>,
    ) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Builder-style [`Self::write`].
    ///
    /// # Errors
    ///
    /// As for [`Self::write`].
    pub fn with_file(
        self,
        relative: impl AsRef<Utf8Path>,
        contents: impl AsRef<[u8]>,
    ) -> Result<Self> {
        self.write(relative, contents)?;
        Ok(self)
    }

    /// Creates the directory `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn mkdir(&self, relative: impl AsRef<Utf8Path>) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).with_context(|| format!("create {path}"))?;
        Ok(path)
    }
}

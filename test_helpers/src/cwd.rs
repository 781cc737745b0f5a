//! Guard for changing the process working directory in tests.
//!
//! The working directory is process-wide, so every change made through
//! [`set_dir`] holds a global mutex until the returned guard is dropped and
//! the original directory is restored.
//!
//! # Examples
//!
//! ```no_run
//! use test_helpers::cwd;
//!
//! # fn run() -> anyhow::Result<()> {
//! let guard = cwd::set_dir("/tmp")?;
//! // Relative paths now resolve under `/tmp`.
//! guard.restore()?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use parking_lot::{Mutex, MutexGuard};

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the original working directory when dropped.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Restores the original directory now, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be entered.
    pub fn restore(&self) -> Result<()> {
        std::env::set_current_dir(&self.original)
            .with_context(|| format!("restore cwd {}", self.original.display()))
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // Best effort; call `restore` to observe failures.
        let _ignored = std::env::set_current_dir(&self.original);
    }
}

/// Enters `path` and returns a guard restoring the previous directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or `path`
/// cannot be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_MUTEX.lock();
    let original = std::env::current_dir().context("read current dir")?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}

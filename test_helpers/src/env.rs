//! Guards for mutating environment variables in tests.
//!
//! Every mutation holds a process-wide re-entrant mutex while it runs and
//! hands back an RAII guard that restores the prior value on drop (removing
//! the variable if it was absent). Use [`lock`] when a test needs several
//! reads and writes of the same variable to happen without interleaving.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _conf = env::set_var("APP_CONF_DIR", "/etc/app");
//! assert_eq!(std::env::var("APP_CONF_DIR").as_deref(), Ok("/etc/app"));
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the environment lock so a test's mutations cannot interleave with
/// other guarded mutations.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvLock {
    /// Sets `key` to `value` while the lock is held.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        set_var(key, value)
    }

    /// Removes `key` while the lock is held.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        remove_var(key)
    }
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let guard = env::set_var("APP_PROPERTIES_DOC_SET", "value");
/// assert_eq!(std::env::var("APP_PROPERTIES_DOC_SET").as_deref(), Ok("value"));
/// drop(guard);
/// assert!(std::env::var("APP_PROPERTIES_DOC_SET").is_err());
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key.into(), |k| unsafe { env::set_var(k, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key.into(), |k| unsafe { env::remove_var(k) })
}

/// Acquires the environment lock for the lifetime of the returned value.
///
/// The lock is re-entrant, so the standalone [`set_var`] and [`remove_var`]
/// helpers keep working on the same thread while it is held.
pub fn lock() -> EnvLock {
    EnvLock {
        _guard: ENV_MUTEX.lock(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(key: &str) -> Option<String> {
        env::var(key).ok()
    }

    #[test]
    fn stacked_guards_restore_in_reverse_order() {
        let lock = lock();
        let key = "APP_PROPERTIES_HELPERS_STACKED";
        let outer = lock.set_var(key, "outer");
        let inner = lock.set_var(key, "inner");
        assert_eq!(read(key).as_deref(), Some("inner"));
        drop(inner);
        assert_eq!(read(key).as_deref(), Some("outer"));
        drop(outer);
        assert_eq!(read(key), None);
    }

    #[test]
    fn removal_is_undone_on_drop() {
        let lock = lock();
        let key = "APP_PROPERTIES_HELPERS_REMOVED";
        let _original = lock.set_var(key, "present");
        let removed = lock.remove_var(key);
        assert_eq!(read(key), None);
        drop(removed);
        assert_eq!(read(key).as_deref(), Some("present"));
    }
}

//! The configuration-directory setting consulted as a last-resort search root.
//!
//! The setting is injected into the resolver rather than read from hidden
//! global state. The environment-backed variant is still read on every call,
//! so overriding and restoring the variable between calls takes effect
//! immediately.

use camino::Utf8PathBuf;

/// Environment variable consulted by [`ConfDirSetting::default`].
pub const CONF_DIR_ENV: &str = "APP_CONF_DIR";

/// Source of the configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfDirSetting {
    /// Read the named environment variable at call time. Unset, empty or
    /// non-UTF-8 values mean no configuration directory.
    Env(String),
    /// Always use this directory.
    Fixed(Utf8PathBuf),
    /// Never search a configuration directory.
    Unset,
}

impl ConfDirSetting {
    /// Reads the named environment variable on every lookup.
    #[must_use]
    pub fn env(name: impl Into<String>) -> Self {
        Self::Env(name.into())
    }

    /// Uses `dir` for every lookup.
    #[must_use]
    pub fn fixed(dir: impl Into<Utf8PathBuf>) -> Self {
        Self::Fixed(dir.into())
    }

    /// Returns the configuration directory as currently configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_properties::ConfDirSetting;
    ///
    /// assert_eq!(ConfDirSetting::Unset.current(), None);
    /// assert_eq!(
    ///     ConfDirSetting::fixed("/etc/app").current(),
    ///     Some(camino::Utf8PathBuf::from("/etc/app"))
    /// );
    /// ```
    #[must_use]
    pub fn current(&self) -> Option<Utf8PathBuf> {
        match self {
            Self::Env(name) => std::env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(Utf8PathBuf::from),
            Self::Fixed(dir) => Some(dir.clone()),
            Self::Unset => None,
        }
    }
}

impl Default for ConfDirSetting {
    fn default() -> Self {
        Self::Env(String::from(CONF_DIR_ENV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_helpers::env as test_env;

    #[test]
    fn default_reads_app_conf_dir() {
        assert_eq!(
            ConfDirSetting::default(),
            ConfDirSetting::Env(String::from("APP_CONF_DIR"))
        );
    }

    #[test]
    fn env_setting_is_read_on_every_call() {
        let _lock = test_env::lock();
        let setting = ConfDirSetting::env("APP_PROPERTIES_CONF_DIR_REREAD");
        let first = test_env::set_var("APP_PROPERTIES_CONF_DIR_REREAD", "/srv/first");
        assert_eq!(setting.current(), Some(Utf8PathBuf::from("/srv/first")));

        let second = test_env::set_var("APP_PROPERTIES_CONF_DIR_REREAD", "/srv/second");
        assert_eq!(setting.current(), Some(Utf8PathBuf::from("/srv/second")));

        drop(second);
        assert_eq!(setting.current(), Some(Utf8PathBuf::from("/srv/first")));
        drop(first);
        assert_eq!(setting.current(), None);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn blank_env_value_means_unset(#[case] value: &str) {
        let lock = test_env::lock();
        let _guard = lock.set_var("APP_PROPERTIES_CONF_DIR_BLANK", value);
        assert_eq!(
            ConfDirSetting::env("APP_PROPERTIES_CONF_DIR_BLANK").current(),
            None
        );
    }
}

//! In-memory properties store consulted by the resolver.
//!
//! Keys map to string values. The store parses the `.properties` text
//! format, expands `${...}` references on demand and can be handed to
//! `figment` for typed extraction.

mod figment_bridge;
mod interpolate;
mod parser;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::{PropertiesError, ResolveResult};

/// A key/value configuration store.
///
/// Iteration is ordered by key.
///
/// # Examples
///
/// ```
/// use app_properties::Properties;
///
/// # fn run() -> app_properties::ResolveResult<()> {
/// let mut props = Properties::parse("app.rest.address = http://localhost:21000")?;
/// assert_eq!(props.get("app.rest.address"), Some("http://localhost:21000"));
///
/// props.set_property("jaas.properties.file", "conf/jaas.properties");
/// assert_eq!(props.get_non_empty("jaas.properties.file"), Some("conf/jaas.properties"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `.properties` text.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Parse`] for malformed `\u` escapes.
    pub fn parse(input: &str) -> ResolveResult<Self> {
        Ok(parser::parse_entries(input)?.into_iter().collect())
    }

    /// Raw value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Trimmed value for `key`, or `None` when absent or blank.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Returns `true` if `key` has a value, blank or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn clear_property(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Entries under `prefix.`, with the prefix and dot removed.
    ///
    /// An empty prefix returns a copy of the whole store.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_properties::Properties;
    ///
    /// let props: Properties = [
    ///     ("app.graph.storage.backend", "berkeleyje"),
    ///     ("app.graph.index.search", "solr"),
    ///     ("app.graphite.host", "metrics"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let graph = props.subset("app.graph");
    /// assert_eq!(graph.len(), 2);
    /// assert_eq!(graph.get("storage.backend"), Some("berkeleyje"));
    /// ```
    #[must_use]
    pub fn subset(&self, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('.');
        if prefix.is_empty() {
            return self.clone();
        }
        self.iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix('.'))
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_owned(), value.to_owned()))
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl FromStr for Properties {
    type Err = Arc<PropertiesError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests;

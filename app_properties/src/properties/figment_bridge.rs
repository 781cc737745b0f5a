//! Exposes a [`Properties`] store as a `figment` provider.

use figment::Figment;
use figment::providers::Serialized;
use figment::value::{Dict, Tag, Value};
use serde::de::DeserializeOwned;

use super::Properties;
use crate::{ResolveResult, ResolveResultExt};

fn parse_scalar(raw: &str) -> Value {
    match raw.parse::<Value>() {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Inserts `value` at the dotted `key`, creating nested tables as needed.
///
/// A nested key replaces a scalar stored at one of its prefixes.
fn insert_dotted(dict: &mut Dict, key: &str, value: Value) {
    let Some((head, tail)) = key.split_once('.') else {
        dict.insert(key.to_owned(), value);
        return;
    };
    let entry = dict
        .entry(head.to_owned())
        .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
    if !matches!(entry, Value::Dict(..)) {
        *entry = Value::Dict(Tag::Default, Dict::new());
    }
    if let Value::Dict(_, nested) = entry {
        insert_dotted(nested, tail, value);
    }
}

impl Properties {
    /// Builds a [`Figment`] whose dotted keys become nested tables.
    ///
    /// Values are interpreted the way `figment` reads environment variables,
    /// so `"8080"` extracts as a number and `"true"` as a boolean.
    #[must_use]
    pub fn to_figment(&self) -> Figment {
        let mut root = Dict::new();
        for (key, value) in self.iter() {
            insert_dotted(&mut root, key, parse_scalar(value));
        }
        Figment::from(Serialized::defaults(root))
    }

    /// Deserializes the store into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_properties::Properties;
    ///
    /// #[derive(serde::Deserialize)]
    /// struct Server {
    ///     port: u16,
    ///     tls: bool,
    /// }
    ///
    /// # fn run() -> app_properties::ResolveResult<()> {
    /// let props = Properties::parse("server.port=21000\nserver.tls=true")?;
    /// let server: Server = props.subset("server").extract()?;
    /// assert_eq!(server.port, 21000);
    /// assert!(server.tls);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::PropertiesError::Extract`] when the values do not fit
    /// `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> ResolveResult<T> {
        self.to_figment().extract().into_resolve()
    }
}

//! `${key}` expansion against the store itself.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::Properties;
use crate::{PropertiesError, ResolveResult};

impl Properties {
    /// Value for `key` with `${other.key}` references expanded.
    ///
    /// References are resolved recursively against this store. Unknown
    /// references and unterminated `${` sequences are kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_properties::Properties;
    ///
    /// # fn run() -> app_properties::ResolveResult<()> {
    /// let props = Properties::parse("home=/opt/app\nconf=${home}/conf\nlog=${missing}/log")?;
    /// assert_eq!(props.get_interpolated("conf")?.as_deref(), Some("/opt/app/conf"));
    /// assert_eq!(props.get_interpolated("log")?.as_deref(), Some("${missing}/log"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Interpolation`] when references form a
    /// cycle or the expanded value grows beyond 1 MiB.
    pub fn get_interpolated(&self, key: &str) -> ResolveResult<Option<String>> {
        Expander {
            props: self,
            chain: Vec::new(),
            expanded: BTreeMap::new(),
        }
        .expand(key)
    }
}

/// Upper bound on the length of one expanded value, in bytes.
pub(crate) const MAX_EXPANDED_LEN: usize = 1 << 20;

/// State for one [`Properties::get_interpolated`] call.
struct Expander<'a> {
    props: &'a Properties,
    chain: Vec<&'a str>,
    expanded: BTreeMap<&'a str, String>,
}

impl<'a> Expander<'a> {
    fn expand(&mut self, key: &'a str) -> ResolveResult<Option<String>> {
        let props = self.props;
        let Some(raw) = props.get(key) else {
            return Ok(None);
        };
        if let Some(done) = self.expanded.get(key) {
            return Ok(Some(done.clone()));
        }
        if self.chain.contains(&key) {
            let mut cycle = self.chain.join(" -> ");
            cycle.push_str(" -> ");
            cycle.push_str(key);
            return Err(self.error(key, format!("reference cycle {cycle}")));
        }
        self.chain.push(key);
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some((before, after)) = rest.split_once("${") {
            out.push_str(before);
            let Some((name, tail)) = after.split_once('}') else {
                out.push_str("${");
                out.push_str(after);
                rest = "";
                break;
            };
            match self.expand(name)? {
                Some(value) => out.push_str(&value),
                None => {
                    out.push_str("${");
                    out.push_str(name);
                    out.push('}');
                }
            }
            if out.len() > MAX_EXPANDED_LEN {
                return Err(self.error(
                    key,
                    format!("expanded value exceeds {MAX_EXPANDED_LEN} bytes"),
                ));
            }
            rest = tail;
        }
        out.push_str(rest);
        self.chain.pop();
        self.expanded.insert(key, out.clone());
        Ok(Some(out))
    }

    fn error(&self, key: &str, message: String) -> Arc<PropertiesError> {
        let root = self.chain.first().copied().unwrap_or(key);
        Arc::new(PropertiesError::interpolation(root, message))
    }
}

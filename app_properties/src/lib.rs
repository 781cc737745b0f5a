//! Application properties and configuration resource resolution.
//!
//! The crate centres on [`ResourceResolver`], which turns a property key (or a
//! default file name) into an open [`ResourceStream`]. Configured values are
//! tried as filesystem paths before bundled resources; default file names
//! are tried as bundled resources, then relative to the working directory,
//! then under the configuration directory named by [`ConfDirSetting`].
//!
//! ```rust,no_run
//! use std::io::Read;
//!
//! use app_properties::{Properties, ResourceBundle, ResourceResolver};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ResourceResolver::builder()
//!     .bundle(ResourceBundle::new().embed("app-jaas.properties", b"login=required"))
//!     .build();
//! let props = Properties::parse("jaas.properties.file = conf/jaas.properties")?;
//! let mut stream = resolver.resolve(&props, "jaas.properties.file", Some("app-jaas.properties"))?;
//! let mut text = String::new();
//! stream.read_to_string(&mut text)?;
//! # Ok(())
//! # }
//! ```

mod bundle;
mod conf_dir;
mod error;
mod fs_helpers;
mod loader;
mod properties;
mod resolver;
mod result_ext;
mod stream;

use std::sync::Arc;

pub use bundle::ResourceBundle;
pub use conf_dir::{CONF_DIR_ENV, ConfDirSetting};
pub use error::{FailureKind, PropertiesError, ResolutionFailure};
pub use loader::DEFAULT_PROPERTIES_FILE;
pub use properties::Properties;
pub use resolver::{
    Candidate, ResolutionBranch, ResolutionPlan, ResourceResolver, ResourceResolverBuilder,
    resolve_file,
};
pub use result_ext::ResolveResultExt;
pub use stream::{ResourceOrigin, ResourceStream};

/// Result type used throughout the crate.
///
/// Errors are reference counted so callers can keep and share them cheaply.
pub type ResolveResult<T> = Result<T, Arc<PropertiesError>>;

//! Extension for mapping foreign errors into [`ResolveResult`].
//!
//! Saves call sites from spelling out `.map_err(|e| Arc::new(e.into()))`.
//!
//! # Examples
//!
//! ```
//! use app_properties::{ResolveResult, ResolveResultExt};
//!
//! fn extract() -> ResolveResult<u16> {
//!     let figment = figment::Figment::new();
//!     figment.extract_inner::<u16>("port").into_resolve()
//! }
//!
//! assert!(extract().is_err());
//! ```

use std::sync::Arc;

use crate::{PropertiesError, ResolveResult};

/// Maps any `Result<T, E>` with `E: Into<PropertiesError>` into a
/// [`ResolveResult<T>`].
pub trait ResolveResultExt<T> {
    /// Convert the error half into a shared [`PropertiesError`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_resolve(self) -> ResolveResult<T>;
}

impl<T, E> ResolveResultExt<T> for Result<T, E>
where
    E: Into<PropertiesError>,
{
    fn into_resolve(self) -> ResolveResult<T> {
        self.map_err(|err| Arc::new(err.into()))
    }
}

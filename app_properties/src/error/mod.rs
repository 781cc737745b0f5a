//! Error types produced while resolving resources and reading properties.

mod constructors;
mod failure;
mod types;

pub use failure::{FailureKind, ResolutionFailure};
pub use types::PropertiesError;

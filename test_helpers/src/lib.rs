//! Test helpers shared across crates in the workspace.
//!
//! - [`env`]: guards for environment variables such as the configuration
//!   directory setting.
//! - [`cwd`]: a guard for the process working directory.
//! - [`conf_tree`]: temporary directory trees holding configuration files.

pub mod conf_tree;
pub mod cwd;
pub mod env;

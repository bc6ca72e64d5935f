#![deny(clippy::all)]

/**
 * maic helper - Rust Implementation
 *
 * Development-time import rewriting for the `maic` icon package
 */
pub mod config;
pub mod emit;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod registry;
pub mod scanner;

// Re-exports
pub use config::HelperOptions;
pub use error::{Result, TransformError};
pub use plugin::{create_helper, DevHelper, PLUGIN_NAME, VIRTUAL_PREFIX};
pub use registry::{Entry, ModuleId, Registry, Target};

/// Name of the virtual package recognized in import statements.
pub const PACKAGE_NAME: &str = "maic";

/// Helper version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

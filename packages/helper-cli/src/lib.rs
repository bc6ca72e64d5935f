#![deny(clippy::all)]

//! Command-line preview of the maic dev helper: run the rewrite over files on
//! disk and show what a bundler would receive.

pub mod preview;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

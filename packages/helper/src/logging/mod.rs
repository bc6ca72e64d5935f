// Logging
//
// Diagnostics sink for the helper. The bundler owns stdout, so nothing is
// printed unless a logger is installed.

mod console_logger;
mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};

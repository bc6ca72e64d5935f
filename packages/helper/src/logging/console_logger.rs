// Console Logger
//
// Everything goes to stderr; stdout belongs to whoever embeds the helper.

use super::logger::{LogLevel, Logger};

/// Console logger.
pub struct ConsoleLogger {
    level: LogLevel,
    prefix: String,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self::with_prefix(level, crate::plugin::PLUGIN_NAME)
    }

    pub fn with_prefix(level: LogLevel, prefix: impl Into<String>) -> Self {
        Self {
            level,
            prefix: prefix.into(),
        }
    }

    fn write(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("[{}] {}: {}", self.prefix, level, msg);
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.write(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.write(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.write(LogLevel::Error, msg);
    }
}

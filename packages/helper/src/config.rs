//! Helper Options
//!
//! The only knob is `enabled`; a disabled helper is never constructed.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HelperOptions {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl HelperOptions {
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Read options from a JSON file, e.g. `{ "enabled": false }`.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

//! Dev Helper Plugin
//!
//! The three bundler hooks over one registry:
//!
//! 1. `transform` rewrites `from "maic/outlined"` to `from "0000/outlined"` and
//!    records what the statement imported under `0000`.
//! 2. `resolve_id` claims any specifier starting with a known identifier and
//!    returns it behind the NUL prefix, so no other resolver touches it.
//! 3. `load` turns that virtual id into re-exports of the individual icon modules.

use crate::config::HelperOptions;
use crate::emit;
use crate::error::{Result, TransformError};
use crate::logging::{LogLevel, Logger, NullLogger};
use crate::registry::{Entry, ModuleId, Registry, Target, ID_WIDTH};
use crate::scanner;

pub const PLUGIN_NAME: &str = "maic helper";

/// Marks ids returned by `resolve_id` as virtual.
pub const VIRTUAL_PREFIX: &str = "\0";

/// Build a helper, or `None` when `options.enabled` is false.
pub fn create_helper(options: HelperOptions) -> Option<DevHelper> {
    DevHelper::new(options)
}

pub struct DevHelper {
    registry: Registry,
    logger: Box<dyn Logger>,
}

impl DevHelper {
    pub fn new(options: HelperOptions) -> Option<Self> {
        if !options.enabled {
            return None;
        }
        Some(Self {
            registry: Registry::new(),
            logger: Box::new(NullLogger::new()),
        })
    }

    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Rewrite every aggregate `maic` import in `source`.
    ///
    /// Returns `Ok(None)` when nothing matched. On error the registry is left
    /// exactly as it was before the call.
    pub fn transform(&mut self, source: &str, unit: &str) -> Result<Option<String>> {
        let matches: Vec<_> = scanner::scan(source).collect();
        if matches.is_empty() {
            return Ok(None);
        }

        let mut entries = Vec::with_capacity(matches.len());
        for m in &matches {
            let imports = scanner::parse_import_list(m.content).map_err(|piece| {
                TransformError::InvalidImport {
                    unit: unit.to_string(),
                    piece: piece.to_string(),
                }
            })?;
            entries.push(Entry::new(
                Target::from_variant(m.variant),
                imports.iter().map(|name| name.to_string()).collect(),
            ));
        }
        self.registry.ensure_capacity(entries.len())?;

        // `cursor` only ever indexes `source`; the output grows independently.
        let mut output = String::with_capacity(source.len());
        let mut cursor = 0;
        for (m, entry) in matches.iter().zip(entries) {
            let id = self.registry.register(entry)?;
            self.log_registration(&id, unit);

            output.push_str(&source[cursor..m.package.start]);
            output.push_str(id.as_str());
            cursor = m.package.end;
        }
        output.push_str(&source[cursor..]);

        self.logger.debug(&format!(
            "rewrote {} import(s) in {}",
            matches.len(),
            unit
        ));
        Ok(Some(output))
    }

    /// Claim specifiers whose first four characters are a registered identifier.
    pub fn resolve_id(&self, specifier: &str) -> Option<String> {
        let id = specifier.get(..ID_WIDTH)?;
        if !self.registry.contains(id) {
            return None;
        }
        let resolved = format!("{}{}", VIRTUAL_PREFIX, specifier);
        self.logger
            .debug(&format!("resolved {} as virtual module {}", specifier, id));
        Some(resolved)
    }

    /// Generate the re-export module for a virtual id from `resolve_id`.
    pub fn load(&self, id: &str) -> Option<String> {
        let key = id.strip_prefix(VIRTUAL_PREFIX)?.get(..ID_WIDTH)?;
        let entry = self.registry.get(key)?;
        self.logger.debug(&format!(
            "loading {} ({} export(s))",
            key,
            entry.imports.len()
        ));
        Some(emit::module_source(entry))
    }

    fn log_registration(&self, id: &ModuleId, unit: &str) {
        if !self.logger.is_enabled(LogLevel::Debug) {
            return;
        }
        if let Some(entry) = self.registry.get(id.as_str()) {
            self.logger.debug(&format!(
                "{} <- {{ {} }} from {} in {}",
                id,
                entry.imports.join(", "),
                entry.target.variant().unwrap_or("<bare>"),
                unit
            ));
        }
    }
}

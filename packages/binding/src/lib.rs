#![deny(clippy::all)]

//! Node.js binding for the maic dev helper.
//!
//! ```js
//! const helper = createHelper({ enabled: true });
//! export default helper && {
//!   name: helper.name,
//!   transform: (code, id) => helper.transform(code, id),
//!   resolveId: (source) => helper.resolveId(source),
//!   load: (id) => helper.load(id),
//! };
//! ```

use maic_helper::logging::{ConsoleLogger, LogLevel};
use maic_helper::{DevHelper, HelperOptions};
use napi::{Error, Result, Status};
use napi_derive::napi;

/// Options accepted by `createHelper`.
#[napi(object)]
pub struct HelperConfig {
    /// Defaults to `true`.
    pub enabled: Option<bool>,
    /// `debug`, `info`, `warn` or `error`. Logging is off when unset.
    pub log_level: Option<String>,
}

#[napi]
pub struct MaicHelper {
    inner: DevHelper,
}

#[napi]
impl MaicHelper {
    #[napi(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Rewritten source, or `null` when the file has no `maic` imports.
    #[napi]
    pub fn transform(&mut self, code: String, id: String) -> Result<Option<String>> {
        self.inner
            .transform(&code, &id)
            .map_err(|e| Error::new(Status::GenericFailure, e.to_string()))
    }

    #[napi]
    pub fn resolve_id(&self, source: String) -> Option<String> {
        self.inner.resolve_id(&source)
    }

    #[napi]
    pub fn load(&self, id: String) -> Option<String> {
        self.inner.load(&id)
    }
}

/// Returns `null` when `enabled` is false.
#[napi]
pub fn create_helper(config: Option<HelperConfig>) -> Result<Option<MaicHelper>> {
    let (enabled, log_level) = match config {
        Some(config) => (config.enabled, config.log_level),
        None => (None, None),
    };
    let options = HelperOptions {
        enabled: enabled.unwrap_or(HelperOptions::default().enabled),
    };
    let Some(mut helper) = DevHelper::new(options) else {
        return Ok(None);
    };

    if let Some(level) = log_level {
        let level = level
            .parse::<LogLevel>()
            .map_err(|e| Error::new(Status::InvalidArg, e))?;
        helper = helper.with_logger(Box::new(ConsoleLogger::new(level)));
    }

    Ok(Some(MaicHelper { inner: helper }))
}

//! Preview
//!
//! Drives one helper instance through the same sequence a bundler would:
//! `transform` every file, then `resolve_id` and `load` each specifier that
//! the rewrite introduced.

use anyhow::{Context, Result};
use maic_helper::DevHelper;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    /// `None` when the file had nothing to rewrite.
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    pub specifier: String,
    pub resolved_id: String,
    pub source: String,
}

#[derive(Debug, Default, Serialize)]
pub struct PreviewReport {
    pub files: Vec<FileReport>,
    pub modules: Vec<ModuleReport>,
}

/// Expand glob patterns into a sorted, de-duplicated file list.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

pub fn preview_files(
    helper: &mut DevHelper,
    paths: &[PathBuf],
    emit_modules: bool,
) -> Result<PreviewReport> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        sources.push((path.display().to_string(), content));
    }
    preview_sources(helper, &sources, emit_modules)
}

/// `sources` are `(unit name, source text)` pairs, transformed in order.
pub fn preview_sources(
    helper: &mut DevHelper,
    sources: &[(String, String)],
    emit_modules: bool,
) -> Result<PreviewReport> {
    let first_new = helper.registry().len();
    let mut report = PreviewReport::default();

    for (unit, content) in sources {
        let code = helper
            .transform(content, unit)
            .with_context(|| format!("Failed to transform {}", unit))?;
        report.files.push(FileReport {
            path: unit.clone(),
            code,
        });
    }

    if emit_modules {
        let specifiers: Vec<String> = helper
            .registry()
            .iter()
            .skip(first_new)
            .map(|(id, entry)| match entry.target.variant() {
                Some(variant) => format!("{}/{}", id, variant),
                None => id.to_string(),
            })
            .collect();
        for specifier in specifiers {
            let resolved_id = helper
                .resolve_id(&specifier)
                .with_context(|| format!("{} was not claimed by the helper", specifier))?;
            let source = helper
                .load(&resolved_id)
                .with_context(|| format!("{} could not be loaded", specifier))?;
            report.modules.push(ModuleReport {
                specifier,
                resolved_id,
                source,
            });
        }
    }

    Ok(report)
}

impl PreviewReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            match &file.code {
                Some(code) => {
                    let _ = writeln!(out, "// File: {}", file.path);
                    out.push_str(code);
                    if !code.ends_with('\n') {
                        out.push('\n');
                    }
                }
                None => {
                    let _ = writeln!(out, "// File: {} (unchanged)", file.path);
                }
            }
        }
        for module in &self.modules {
            let _ = writeln!(out, "// Module: {}", module.specifier);
            out.push_str(&module.source);
            out.push('\n');
        }
        out
    }
}
